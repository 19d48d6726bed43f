//! Redaction rule domain model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A named pattern + policy unit that finds and replaces sensitive spans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactionRule {
    pub name: String,
    /// Regular expression, always compiled case-insensitively
    pub pattern: String,
    pub replacement: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Higher values are applied first; ties keep catalog insertion order
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub compliance_standards: BTreeSet<ComplianceStandard>,
    /// Reserved: no matcher consults surrounding text yet
    #[serde(default)]
    pub context_aware: bool,
    /// Mask each match with the rule's formatter instead of `replacement`
    #[serde(default)]
    pub preserve_format: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_priority() -> i32 {
    50
}

impl RedactionRule {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
            enabled: default_enabled(),
            priority: default_priority(),
            compliance_standards: BTreeSet::new(),
            context_aware: false,
            preserve_format: false,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_standards(
        mut self,
        standards: impl IntoIterator<Item = ComplianceStandard>,
    ) -> Self {
        self.compliance_standards.extend(standards);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn preserving_format(mut self) -> Self {
        self.preserve_format = true;
        self
    }

    /// Whether this rule is tagged with the given standard
    pub fn covers(&self, standard: ComplianceStandard) -> bool {
        self.compliance_standards.contains(&standard)
    }
}

/// Regulatory frameworks used to tag rules and report residual risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplianceStandard {
    #[serde(rename = "PCI_DSS")]
    PciDss,
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "HIPAA")]
    Hipaa,
    #[serde(rename = "SOX")]
    Sox,
    #[serde(rename = "CCPA")]
    Ccpa,
}

impl ComplianceStandard {
    pub const ALL: [ComplianceStandard; 5] = [
        ComplianceStandard::PciDss,
        ComplianceStandard::Gdpr,
        ComplianceStandard::Hipaa,
        ComplianceStandard::Sox,
        ComplianceStandard::Ccpa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStandard::PciDss => "PCI-DSS",
            ComplianceStandard::Gdpr => "GDPR",
            ComplianceStandard::Hipaa => "HIPAA",
            ComplianceStandard::Sox => "SOX",
            ComplianceStandard::Ccpa => "CCPA",
        }
    }
}

impl fmt::Display for ComplianceStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceStandard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "PCIDSS" | "PCI" => Ok(ComplianceStandard::PciDss),
            "GDPR" => Ok(ComplianceStandard::Gdpr),
            "HIPAA" => Ok(ComplianceStandard::Hipaa),
            "SOX" => Ok(ComplianceStandard::Sox),
            "CCPA" => Ok(ComplianceStandard::Ccpa),
            _ => Err(format!("Unknown compliance standard: {}", s)),
        }
    }
}

/// Selects which built-in rule groups an engine carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensitivityLevel {
    Low,
    #[default]
    Medium,
    High,
    /// No built-in groups, only custom rules
    Custom,
}

impl SensitivityLevel {
    /// Whether built-in rules of `group` are active at this level
    pub fn includes(&self, group: RuleGroup) -> bool {
        match (self, group) {
            (SensitivityLevel::Custom, _) => false,
            (_, RuleGroup::Financial) | (_, RuleGroup::Personal) => true,
            (SensitivityLevel::Medium | SensitivityLevel::High, RuleGroup::Location) => true,
            (SensitivityLevel::High, RuleGroup::Sensitive) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensitivityLevel::Low => "LOW",
            SensitivityLevel::Medium => "MEDIUM",
            SensitivityLevel::High => "HIGH",
            SensitivityLevel::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensitivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(SensitivityLevel::Low),
            "MEDIUM" => Ok(SensitivityLevel::Medium),
            "HIGH" => Ok(SensitivityLevel::High),
            "CUSTOM" => Ok(SensitivityLevel::Custom),
            _ => Err(format!("Unknown sensitivity level: {}", s)),
        }
    }
}

/// Built-in rule partitions, gated by sensitivity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    Financial,
    Personal,
    Location,
    /// Date of birth and government identifiers
    Sensitive,
}
