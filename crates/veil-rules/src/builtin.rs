//! Built-in redaction rules
//!
//! Priorities are tiered by group: every financial/personal rule outranks every
//! location rule, which outranks every date-of-birth/government-ID rule. Raising
//! the sensitivity level therefore only appends rules to the end of the pass and
//! never changes what the lower-level rules see.

use veil_core::ComplianceStandard::{Ccpa, Gdpr, Hipaa, PciDss, Sox};
use veil_core::{RedactionRule, RuleGroup, SensitivityLevel};

/// A built-in rule and the group that gates it
#[derive(Debug, Clone)]
pub struct BuiltinRule {
    pub group: RuleGroup,
    pub rule: RedactionRule,
}

impl BuiltinRule {
    fn new(group: RuleGroup, rule: RedactionRule) -> Self {
        Self { group, rule }
    }
}

/// All built-in rules in catalog insertion order
pub fn builtin_rules() -> Vec<BuiltinRule> {
    let mut rules = Vec::new();
    rules.extend(financial_rules());
    rules.extend(personal_rules());
    rules.extend(location_rules());
    rules.extend(sensitive_rules());
    rules
}

/// Built-in rules active at `level`, in catalog insertion order
pub fn rules_for_level(level: SensitivityLevel) -> Vec<BuiltinRule> {
    builtin_rules()
        .into_iter()
        .filter(|b| level.includes(b.group))
        .collect()
}

fn financial_rules() -> Vec<BuiltinRule> {
    let group = RuleGroup::Financial;
    vec![
        // Must run before anything that matches bare digit runs
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "credit_card_full",
                r"\b(?:4\d{3}|5[1-5]\d{2}|6011|65\d{2})[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b",
                "[REDACTED_CARD]",
            )
            .with_priority(100)
            .with_standards([PciDss])
            .preserving_format(),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "bank_account_number",
                r"\b(?:bank\s+)?(?:account|acct)(?:\s+(?:number|num|no\.?|#))?[\s:#]*\d{8,17}\b",
                "[REDACTED_ACCOUNT]",
            )
            .with_priority(90)
            .with_standards([PciDss, Sox, Gdpr]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "routing_number",
                r"\b(?:routing|aba)(?:\s+(?:number|num|no\.?|#))?[\s:#]*\d{9}\b",
                "[REDACTED_ROUTING]",
            )
            .with_priority(88)
            .with_standards([Sox]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "large_amounts",
                r"\$\s?(?:\d{1,3}(?:,\d{3}){2,}|\d{2,3},\d{3}|\d{5,})(?:\.\d{2})?\b",
                "[REDACTED_AMOUNT]",
            )
            .with_priority(60)
            .with_standards([Sox]),
        ),
    ]
}

fn personal_rules() -> Vec<BuiltinRule> {
    let group = RuleGroup::Personal;
    vec![
        BuiltinRule::new(
            group,
            RedactionRule::new("ssn_full", r"\b\d{3}-\d{2}-\d{4}\b", "[REDACTED_SSN]")
                .with_priority(95)
                .with_standards([Hipaa, Ccpa, Gdpr]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "ssn_compact",
                r"\b(?:ssn|social\s+security(?:\s+number)?)[\s:#-]*\d{9}\b",
                "[REDACTED_SSN]",
            )
            .with_priority(94)
            .with_standards([Hipaa, Ccpa, Gdpr]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "email_address",
                r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
                "[REDACTED_EMAIL]",
            )
            .with_priority(70)
            .with_standards([Gdpr, Ccpa]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "phone_number",
                r"(?:\+?\b1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b",
                "[REDACTED_PHONE]",
            )
            .with_priority(65)
            .with_standards([Gdpr, Ccpa]),
        ),
    ]
}

fn location_rules() -> Vec<BuiltinRule> {
    let group = RuleGroup::Location;
    vec![
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "street_address",
                r"\b\d{1,5}(?:\s+[A-Za-z0-9.]+){1,4}\s+(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct|way|place|pl)\b\.?",
                "[REDACTED_ADDRESS]",
            )
            .with_priority(55)
            .with_standards([Gdpr, Ccpa]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "ip_address",
                r"\b(?:(?:25[0-5]|2[0-4]\d|1?\d?\d)\.){3}(?:25[0-5]|2[0-4]\d|1?\d?\d)\b",
                "[REDACTED_IP]",
            )
            .with_priority(50)
            .with_standards([Gdpr]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new("zip_code_plus4", r"\b\d{5}-\d{4}\b", "[REDACTED_ZIP]")
                .with_priority(45)
                .with_standards([Ccpa]),
        ),
    ]
}

fn sensitive_rules() -> Vec<BuiltinRule> {
    let group = RuleGroup::Sensitive;
    vec![
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "date_of_birth",
                r"\b(?:dob|d\.o\.b\.?|date\s+of\s+birth|birth\s*date|born\s+on)[\s:]*\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}\b",
                "[REDACTED_DOB]",
            )
            .with_priority(39)
            .with_standards([Hipaa, Gdpr]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "passport_number",
                r"\bpassport(?:\s+(?:number|num|no\.?|#))?[\s:#]*[A-Z]{0,2}\d{6,9}\b",
                "[REDACTED_PASSPORT]",
            )
            .with_priority(35)
            .with_standards([Gdpr]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "drivers_license",
                r"\b(?:driver'?s?\s+licen[cs]e|DL)(?:\s+(?:number|num|no\.?|#))?[\s:#]*[A-Z]{0,2}\d{5,12}\b",
                "[REDACTED_LICENSE]",
            )
            .with_priority(33)
            .with_standards([Ccpa]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new("ein_tax_id", r"\b\d{2}-\d{7}\b", "[REDACTED_TAX_ID]")
                .with_priority(30)
                .with_standards([Sox]),
        ),
        BuiltinRule::new(
            group,
            RedactionRule::new(
                "medical_record_number",
                r"\b(?:MRN|medical\s+record(?:\s+(?:number|num|no\.?|#))?)[\s:#]*\d{6,10}\b",
                "[REDACTED_MRN]",
            )
            .with_priority(28)
            .with_standards([Hipaa]),
        ),
    ]
}
