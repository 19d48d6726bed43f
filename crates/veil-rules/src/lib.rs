//! Rule catalog and pattern compiler for veil
//!
//! This crate provides:
//! - The built-in rule set, partitioned by rule group
//! - `RuleCatalog`: ordered, named rules with their compiled matchers
//! - Format-preserving maskers used by `preserve_format` rules

pub mod builtin;
pub mod catalog;
pub mod format;

pub use builtin::{BuiltinRule, builtin_rules, rules_for_level};
pub use catalog::{ActiveRule, RuleCatalog, RuleInfo, RuleOrigin, compile};
