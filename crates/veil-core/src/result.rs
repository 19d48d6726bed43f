//! Redaction result value object

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of one scan-and-rewrite call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactionResult {
    pub original_text: String,
    pub redacted_text: String,
    /// Rule name -> matches replaced; only rules that fired appear
    pub redactions_made: BTreeMap<String, usize>,
    /// Always within [0, 100]
    pub risk_score: f64,
    /// `"<STANDARD>: <description>"` for each residual pattern found in the output
    pub compliance_violations: Vec<String>,
    pub processing_time_ms: f64,
}

impl RedactionResult {
    /// Zero-valued result returned for empty or absent input
    pub fn empty() -> Self {
        Self {
            original_text: String::new(),
            redacted_text: String::new(),
            redactions_made: BTreeMap::new(),
            risk_score: 0.0,
            compliance_violations: Vec::new(),
            processing_time_ms: 0.0,
        }
    }

    pub fn is_compliant(&self) -> bool {
        self.compliance_violations.is_empty()
    }

    pub fn total_redactions(&self) -> usize {
        self.redactions_made.values().sum()
    }
}

impl Default for RedactionResult {
    fn default() -> Self {
        Self::empty()
    }
}
