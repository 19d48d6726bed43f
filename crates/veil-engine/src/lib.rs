//! Redaction & compliance engine for veil
//!
//! Applies the rule catalog to text in priority order, scores what was found,
//! and re-checks the output against per-standard residual patterns.

pub mod cached;
pub mod compliance;
pub mod factory;
pub mod redactor;
pub mod risk;
pub mod stats;

pub use cached::{
    DEFAULT_CACHE_CAPACITY, ResultCache, cached_entries, clear_cache, default_redactor,
    redact_cached,
};
pub use compliance::ComplianceChecker;
pub use factory::{ccpa_redactor, gdpr_redactor, hipaa_redactor, pci_dss_redactor, sox_redactor};
pub use redactor::{Redactor, scan_and_rewrite};
pub use stats::PerformanceStats;

pub use veil_core::{ComplianceStandard, RedactionResult, RedactionRule, SensitivityLevel};
