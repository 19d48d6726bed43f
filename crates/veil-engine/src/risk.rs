//! Risk scoring over per-rule match counts

use std::collections::BTreeMap;

/// Category keywords sniffed out of rule names, checked in order
const CATEGORY_WEIGHTS: [(&str, f64); 8] = [
    ("credit_card", 10.0),
    ("ssn", 10.0),
    ("bank_account", 9.0),
    ("passport", 8.0),
    ("phone", 5.0),
    ("email", 4.0),
    ("address", 6.0),
    ("large_amounts", 3.0),
];

const MAX_FREQUENCY_MULTIPLIER: f64 = 2.0;
const MAX_SCORE: f64 = 100.0;

/// Base weight for a rule. Unrecognized names weigh nothing.
pub fn category_weight(rule_name: &str) -> f64 {
    CATEGORY_WEIGHTS
        .iter()
        .find(|(category, _)| rule_name.contains(category))
        .map(|&(_, weight)| weight)
        .unwrap_or(0.0)
}

/// Score in [0, 100] from match counts and the length (in chars) of the
/// scanned text
pub fn risk_score(redactions: &BTreeMap<String, usize>, text_length: usize) -> f64 {
    let total_risk: f64 = redactions
        .iter()
        .map(|(name, &count)| {
            let frequency = (count as f64 / 10.0).min(MAX_FREQUENCY_MULTIPLIER);
            category_weight(name) * frequency
        })
        .sum();

    let normalized = total_risk / (text_length as f64 / 100.0).max(1.0);
    normalized.clamp(0.0, MAX_SCORE)
}
