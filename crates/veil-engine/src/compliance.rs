//! Residual-risk checks against redacted output
//!
//! These patterns are deliberately narrower than the rule catalog: they verify
//! that the most obvious identifiers per standard are gone, nothing more. A
//! residual bank account number, for instance, is not flagged.

use regex::{Regex, RegexBuilder};
use veil_core::ComplianceStandard;

struct ComplianceCheck {
    standard: ComplianceStandard,
    pattern: Regex,
    description: &'static str,
}

/// Re-scans redacted text and reports what still looks sensitive
pub struct ComplianceChecker {
    checks: Vec<ComplianceCheck>,
}

impl ComplianceChecker {
    pub fn new() -> Self {
        let table: [(ComplianceStandard, &str, &str); 4] = [
            (
                ComplianceStandard::PciDss,
                r"\b(?:4\d{3}|5[1-5]\d{2})[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b",
                "Unmasked credit card number detected",
            ),
            (
                ComplianceStandard::Gdpr,
                r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
                "Unredacted email address detected",
            ),
            (
                ComplianceStandard::Hipaa,
                r"\bDOB:\s*\d{1,2}/\d{1,2}/\d{2,4}\b",
                "Unredacted date of birth detected",
            ),
            (
                ComplianceStandard::Ccpa,
                r"\b\d{3}-\d{2}-\d{4}\b",
                "Unredacted social security number detected",
            ),
        ];

        let checks = table
            .into_iter()
            .map(|(standard, pattern, description)| ComplianceCheck {
                standard,
                pattern: RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("built-in compliance pattern"),
                description,
            })
            .collect();

        Self { checks }
    }

    /// One `"<STANDARD>: <description>"` entry per failed check, in check order
    pub fn violations(&self, redacted_text: &str) -> Vec<String> {
        self.checks
            .iter()
            .filter(|check| check.pattern.is_match(redacted_text))
            .map(|check| format!("{}: {}", check.standard, check.description))
            .collect()
    }
}

impl Default for ComplianceChecker {
    fn default() -> Self {
        Self::new()
    }
}
