use veil_config::RulesFile;
use veil_engine::{ComplianceStandard, RedactionRule, Redactor, SensitivityLevel};

fn employee_rule() -> RedactionRule {
    RedactionRule::new("employee_id", r"\bEMP-\d{6}\b", "[REDACTED_EMPLOYEE]")
        .with_priority(80)
        .with_standards([ComplianceStandard::Gdpr, ComplianceStandard::Ccpa])
}

#[test]
fn test_export_contains_only_custom_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");

    let redactor = Redactor::new(SensitivityLevel::High);
    redactor.add_rule(employee_rule()).unwrap();
    redactor.export_config(&path).unwrap();

    let file = RulesFile::load(&path).unwrap();
    assert_eq!(file.level, SensitivityLevel::High);
    assert_eq!(file.rules, vec![employee_rule()]);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["level"], "HIGH");
    assert_eq!(raw["rules"][0]["name"], "employee_id");
    assert_eq!(raw["rules"][0]["compliance_standards"][0], "GDPR");
}

#[test]
fn test_import_restores_level_and_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");

    let source = Redactor::new(SensitivityLevel::High);
    source.add_rule(employee_rule()).unwrap();
    source.export_config(&path).unwrap();

    let target = Redactor::new(SensitivityLevel::Low);
    target.import_config(&path).unwrap();

    assert_eq!(target.level(), SensitivityLevel::High);
    let result = target.redact_text("EMP-123456 born DOB: 01/02/1990");
    assert_eq!(result.redactions_made.get("employee_id"), Some(&1));
    assert_eq!(result.redactions_made.get("date_of_birth"), Some(&1));
}

#[test]
fn test_malformed_import_leaves_catalog_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(&path, "{ \"level\": \"HIGH\", \"rules\": [").unwrap();

    let redactor = Redactor::new(SensitivityLevel::Low);
    redactor.add_rule(employee_rule()).unwrap();
    let before: Vec<String> = redactor
        .active_rules()
        .iter()
        .map(|a| a.rule.name.clone())
        .collect();

    assert!(redactor.import_config(&path).is_err());
    assert!(redactor.import_config(&dir.path().join("missing.json")).is_err());

    let after: Vec<String> = redactor
        .active_rules()
        .iter()
        .map(|a| a.rule.name.clone())
        .collect();
    assert_eq!(before, after);
    assert_eq!(redactor.level(), SensitivityLevel::Low);
}

#[test]
fn test_import_with_invalid_pattern_is_abandoned() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    let file = RulesFile::new(
        SensitivityLevel::High,
        vec![
            RedactionRule::new("good", "fine", "[OK]"),
            RedactionRule::new("bad", "(unclosed", "[BAD]"),
        ],
    );
    file.save(&path).unwrap();

    let redactor = Redactor::new(SensitivityLevel::Medium);
    assert!(redactor.import_config(&path).is_err());
    assert_eq!(redactor.level(), SensitivityLevel::Medium);
    assert!(redactor.rules().iter().all(|info| info.rule.name != "good"));
}
