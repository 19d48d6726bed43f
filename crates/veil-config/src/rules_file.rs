//! Custom rule file: the import/export format for a redactor's configuration
//!
//! ```json
//! {
//!   "level": "MEDIUM",
//!   "rules": [
//!     { "name": "employee_id", "pattern": "EMP-\\d{6}", "replacement": "[REDACTED_EMPLOYEE]",
//!       "enabled": true, "priority": 50, "compliance_standards": ["GDPR"] }
//!   ]
//! }
//! ```
//!
//! Built-in rules are never written here, only custom rules and the level.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use veil_core::{RedactionRule, SensitivityLevel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesFile {
    #[serde(default)]
    pub level: SensitivityLevel,

    #[serde(default)]
    pub rules: Vec<RedactionRule>,
}

impl RulesFile {
    pub fn new(level: SensitivityLevel, rules: Vec<RedactionRule>) -> Self {
        Self { level, rules }
    }

    /// Read and validate a rule file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: RulesFile = serde_json::from_str(&content)?;
        file.validate()?;
        Ok(file)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Names must be non-empty and unique
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.name.trim().is_empty() {
                bail!("Rule with empty name (pattern {:?})", rule.pattern);
            }
            if !seen.insert(rule.name.as_str()) {
                bail!("Duplicate rule name: {}", rule.name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veil_core::ComplianceStandard;

    #[test]
    fn test_parse_rules_file() {
        let json = r#"{
            "level": "HIGH",
            "rules": [
                {
                    "name": "employee_id",
                    "pattern": "EMP-\\d{6}",
                    "replacement": "[REDACTED_EMPLOYEE]",
                    "enabled": true,
                    "priority": 75,
                    "compliance_standards": ["GDPR", "CCPA"]
                },
                { "name": "ticket", "pattern": "TCK-\\d+", "replacement": "[TICKET]" }
            ]
        }"#;
        let file: RulesFile = serde_json::from_str(json).unwrap();

        assert_eq!(file.level, SensitivityLevel::High);
        assert_eq!(file.rules.len(), 2);
        assert_eq!(file.rules[0].priority, 75);
        assert!(file.rules[0].covers(ComplianceStandard::Ccpa));
        assert_eq!(file.rules[1].priority, 50);
        assert!(file.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        let file = RulesFile::new(
            SensitivityLevel::Low,
            vec![RedactionRule::new("order", r"ORD-\d{6}", "[ORDER]")
                .with_standards([ComplianceStandard::Sox])],
        );

        file.save(&path).unwrap();
        let loaded = RulesFile::load(&path).unwrap();
        assert_eq!(loaded, file);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let file = RulesFile::new(
            SensitivityLevel::Medium,
            vec![
                RedactionRule::new("dup", "a", "[A]"),
                RedactionRule::new("dup", "b", "[B]"),
            ],
        );
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, "{ \"level\": \"MEDIUM\", \"rules\": [ { \"name\": ").unwrap();

        assert!(RulesFile::load(&path).is_err());
        assert!(RulesFile::load(&dir.path().join("missing.json")).is_err());
    }
}
