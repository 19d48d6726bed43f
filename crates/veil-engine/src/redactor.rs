//! Scan-and-rewrite engine

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use parking_lot::RwLock;
use regex::Captures;
use tracing::{debug, info, warn};
use veil_config::RulesFile;
use veil_core::{
    ComplianceStandard, Error, RedactionResult, RedactionRule, Result, SensitivityLevel,
};
use veil_rules::{ActiveRule, RuleCatalog, RuleInfo, format};

use crate::compliance::ComplianceChecker;
use crate::risk;
use crate::stats::{PerformanceStats, StatsRecorder};

/// Redaction & compliance engine.
///
/// Safe to share across threads: catalog mutations take a write lock, while
/// redactions only clone the active-rule snapshot and then scan lock-free.
pub struct Redactor {
    catalog: RwLock<RuleCatalog>,
    checker: ComplianceChecker,
    stats: StatsRecorder,
    generation: AtomicU64,
}

impl Redactor {
    /// Engine with the built-in rules for `level`
    pub fn new(level: SensitivityLevel) -> Self {
        Self::from_catalog(RuleCatalog::new(level))
    }

    /// Engine with the built-ins for `level` plus custom rules. Fails if any
    /// custom pattern does not compile.
    pub fn with_rules(
        level: SensitivityLevel,
        rules: impl IntoIterator<Item = RedactionRule>,
    ) -> Result<Self> {
        Ok(Self::from_catalog(RuleCatalog::with_custom_rules(level, rules)?))
    }

    /// Engine enabling exactly the built-in rules tagged with `standard`,
    /// regardless of sensitivity level
    pub fn for_standard(standard: ComplianceStandard) -> Self {
        let mut catalog = RuleCatalog::new(SensitivityLevel::High);
        catalog.restrict_to(standard);
        Self::from_catalog(catalog)
    }

    fn from_catalog(catalog: RuleCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            checker: ComplianceChecker::new(),
            stats: StatsRecorder::default(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn level(&self) -> SensitivityLevel {
        self.catalog.read().level()
    }

    /// Rebuild the built-in groups for `level`, keeping custom rules
    pub fn set_level(&self, level: SensitivityLevel) {
        self.mutate(|catalog| catalog.set_level(level));
    }

    /// Insert or replace a rule by name. An invalid pattern is logged and
    /// returned as an error; the rule stays in the catalog without a matcher.
    pub fn add_rule(&self, rule: RedactionRule) -> Result<()> {
        self.mutate(|catalog| catalog.add_rule(rule))
    }

    pub fn remove_rule(&self, name: &str) -> bool {
        self.mutate(|catalog| catalog.remove_rule(name))
    }

    pub fn set_enabled(&self, name: &str, enabled: bool) -> bool {
        self.mutate(|catalog| catalog.set_enabled(name, enabled))
    }

    /// Disable every rule not tagged with `standard`
    pub fn restrict_to(&self, standard: ComplianceStandard) {
        self.mutate(|catalog| catalog.restrict_to(standard));
    }

    pub fn active_rules(&self) -> Arc<[ActiveRule]> {
        self.catalog.read().active_rules()
    }

    pub fn rules(&self) -> Vec<RuleInfo> {
        self.catalog.read().rules()
    }

    /// Bumped on every catalog mutation
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    fn mutate<T>(&self, f: impl FnOnce(&mut RuleCatalog) -> T) -> T {
        let mut catalog = self.catalog.write();
        let outcome = f(&mut catalog);
        self.generation.fetch_add(1, Ordering::AcqRel);
        outcome
    }

    /// Redact `text` with the active rules, then score it and check the
    /// output for residual violations
    pub fn redact_text(&self, text: &str) -> RedactionResult {
        if text.is_empty() {
            return RedactionResult::empty();
        }

        let started = Instant::now();
        let rules = self.active_rules();
        let (redacted_text, redactions_made) = scan_and_rewrite(&rules, text);
        let risk_score = risk::risk_score(&redactions_made, text.chars().count());
        let compliance_violations = self.checker.violations(&redacted_text);
        let elapsed = started.elapsed();

        self.stats.record(&redactions_made, elapsed.as_nanos() as u64);
        debug!(
            "Redacted {} matches across {} rules (risk {:.2}, {} violations)",
            redactions_made.values().sum::<usize>(),
            redactions_made.len(),
            risk_score,
            compliance_violations.len()
        );

        RedactionResult {
            original_text: text.to_string(),
            redacted_text,
            redactions_made,
            risk_score,
            compliance_violations,
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    /// Absent input yields the empty result
    pub fn redact_opt(&self, text: Option<&str>) -> RedactionResult {
        text.map_or_else(RedactionResult::empty, |text| self.redact_text(text))
    }

    /// Redact each text independently
    pub fn batch_redact<S: AsRef<str>>(&self, texts: &[S]) -> Vec<RedactionResult> {
        texts
            .iter()
            .map(|text| self.redact_text(text.as_ref()))
            .collect()
    }

    /// Write the level and custom rules (never built-ins) to `path`
    pub fn export_config(&self, path: &Path) -> Result<()> {
        let file = {
            let catalog = self.catalog.read();
            RulesFile::new(catalog.level(), catalog.custom_rules())
        };

        if let Err(e) = file.save(path) {
            warn!("Failed to export rules to {}: {}", path.display(), e);
            return Err(Error::Other(e));
        }

        info!(
            "Exported {} custom rules at level {} to {}",
            file.rules.len(),
            file.level,
            path.display()
        );
        Ok(())
    }

    /// Replace the level and custom rules from `path`. On any failure the
    /// current catalog is left untouched.
    pub fn import_config(&self, path: &Path) -> Result<()> {
        let file = match RulesFile::load(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Abandoning import of {}: {}", path.display(), e);
                return Err(Error::InvalidConfig(format!("{}: {}", path.display(), e)));
            }
        };

        let level = file.level;
        let count = file.rules.len();
        let catalog = match RuleCatalog::with_custom_rules(level, file.rules) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Abandoning import of {}: {}", path.display(), e);
                return Err(e);
            }
        };

        self.mutate(|current| *current = catalog);
        info!(
            "Imported {} custom rules at level {} from {}",
            count,
            level,
            path.display()
        );
        Ok(())
    }

    pub fn stats(&self) -> PerformanceStats {
        self.stats.snapshot()
    }

    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(SensitivityLevel::default())
    }
}

/// Apply `rules` in order, each one scanning the output of the previous ones.
///
/// Returns the rewritten text and, for every rule that matched, the number of
/// non-overlapping matches it replaced.
pub fn scan_and_rewrite(
    rules: &[ActiveRule],
    text: &str,
) -> (String, BTreeMap<String, usize>) {
    let mut current = text.to_string();
    let mut redactions = BTreeMap::new();

    for active in rules {
        let mut count = 0;
        let replaced = active.matcher.replace_all(&current, |caps: &Captures<'_>| {
            count += 1;
            if active.rule.preserve_format {
                Cow::Owned(format::mask(&active.rule.name, &caps[0]))
            } else {
                Cow::Borrowed(active.rule.replacement.as_str())
            }
        });

        if count > 0 {
            let next = replaced.into_owned();
            current = next;
            redactions.insert(active.rule.name.clone(), count);
        }
    }

    (current, redactions)
}
