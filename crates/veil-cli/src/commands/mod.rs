pub mod redact;
pub mod rules;

use anyhow::Result;
use tracing::debug;
use veil_config::Config;
use veil_core::SensitivityLevel;
use veil_engine::Redactor;

use crate::cli::RedactorOptions;

/// Build the redactor from config, then apply command-line overrides
pub fn build_redactor(options: &RedactorOptions, config: &Config) -> Result<Redactor> {
    let redactor = Redactor::new(config.level);

    if let Some(path) = options.rules.as_ref().or(config.rules_file.as_ref()) {
        redactor.import_config(path)?;
    }

    if let Some(level) = options.level {
        redactor.set_level(level);
    }

    // A standard filter applies to every built-in group, whatever the level
    if let Some(standard) = options.standard {
        redactor.set_level(SensitivityLevel::High);
        redactor.restrict_to(standard);
    }

    debug!(
        "Redactor ready at level {} with {} active rules",
        redactor.level(),
        redactor.active_rules().len()
    );
    Ok(redactor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veil_core::{ComplianceStandard, RedactionRule};

    #[test]
    fn test_build_from_config() {
        let config = Config {
            level: SensitivityLevel::Low,
            rules_file: None,
        };
        let redactor = build_redactor(&RedactorOptions::default(), &config).unwrap();
        assert_eq!(redactor.level(), SensitivityLevel::Low);
    }

    #[test]
    fn test_overrides_apply_after_rule_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        let source = Redactor::new(SensitivityLevel::Low);
        source
            .add_rule(RedactionRule::new("ticket", r"TCK-\d+", "[TICKET]"))
            .unwrap();
        source.export_config(&path).unwrap();

        let options = RedactorOptions {
            level: Some(SensitivityLevel::High),
            standard: None,
            rules: Some(path),
        };
        let redactor = build_redactor(&options, &Config::default()).unwrap();

        assert_eq!(redactor.level(), SensitivityLevel::High);
        let result = redactor.redact_text("TCK-42 DOB: 01/02/1990");
        assert_eq!(result.redactions_made.get("ticket"), Some(&1));
        assert_eq!(result.redactions_made.get("date_of_birth"), Some(&1));
    }

    #[test]
    fn test_standard_filter() {
        let options = RedactorOptions {
            level: Some(SensitivityLevel::Low),
            standard: Some(ComplianceStandard::Hipaa),
            rules: None,
        };
        let redactor = build_redactor(&options, &Config::default()).unwrap();

        assert!(
            redactor
                .active_rules()
                .iter()
                .all(|a| a.rule.covers(ComplianceStandard::Hipaa))
        );
        assert!(
            redactor
                .active_rules()
                .iter()
                .any(|a| a.rule.name == "date_of_birth")
        );
    }
}
