//! Core domain models for veil
//!
//! This crate contains:
//! - Rule model (RedactionRule, SensitivityLevel, RuleGroup, ComplianceStandard)
//! - Redaction result value object
//! - Shared error type

pub mod error;
pub mod result;
pub mod rule;

pub use error::{Error, Result};
pub use result::RedactionResult;
pub use rule::{ComplianceStandard, RedactionRule, RuleGroup, SensitivityLevel};
