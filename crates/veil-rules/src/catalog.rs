//! Rule catalog and pattern compiler
//!
//! Rules live in insertion order. Every mutation recompiles what changed and
//! rebuilds the priority-sorted snapshot of active rules, so a scan pass only
//! has to clone an `Arc`.

use std::cmp::Reverse;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};
use veil_core::{ComplianceStandard, Error, RedactionRule, Result, RuleGroup, SensitivityLevel};

use crate::builtin::rules_for_level;

/// Where a catalog rule came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOrigin {
    Builtin(RuleGroup),
    Custom,
}

/// An enabled rule paired with its compiled matcher
#[derive(Debug, Clone)]
pub struct ActiveRule {
    pub rule: RedactionRule,
    pub matcher: Regex,
}

/// Listing entry for tooling
#[derive(Debug, Clone)]
pub struct RuleInfo {
    pub rule: RedactionRule,
    pub origin: RuleOrigin,
    /// False for disabled rules and rules whose pattern failed to compile
    pub compiled: bool,
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    rule: RedactionRule,
    origin: RuleOrigin,
    matcher: Option<Regex>,
}

/// Ordered, name-unique set of redaction rules
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    level: SensitivityLevel,
    entries: Vec<CatalogEntry>,
    active: Arc<[ActiveRule]>,
}

/// Compile a rule's pattern case-insensitively
pub fn compile(rule: &RedactionRule) -> Result<Regex> {
    RegexBuilder::new(&rule.pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            rule: rule.name.clone(),
            source,
        })
}

fn compile_logged(rule: &RedactionRule) -> Option<Regex> {
    if !rule.enabled {
        return None;
    }
    match compile(rule) {
        Ok(matcher) => Some(matcher),
        Err(e) => {
            warn!("Skipping rule {}: {}", rule.name, e);
            None
        }
    }
}

impl RuleCatalog {
    /// Catalog holding the built-in rules for `level`
    pub fn new(level: SensitivityLevel) -> Self {
        let mut catalog = Self {
            level,
            entries: Vec::new(),
            active: Arc::from(Vec::new()),
        };
        catalog.load_builtins();
        catalog.rebuild_active();
        catalog
    }

    /// Built-ins for `level` plus `rules`, rejecting the whole set if any
    /// pattern fails to compile
    pub fn with_custom_rules(
        level: SensitivityLevel,
        rules: impl IntoIterator<Item = RedactionRule>,
    ) -> Result<Self> {
        let mut catalog = Self::new(level);
        for rule in rules {
            let matcher = compile(&rule)?;
            let matcher = rule.enabled.then_some(matcher);
            catalog.insert(CatalogEntry {
                rule,
                origin: RuleOrigin::Custom,
                matcher,
            });
        }
        catalog.rebuild_active();
        Ok(catalog)
    }

    pub fn level(&self) -> SensitivityLevel {
        self.level
    }

    /// Insert or replace a custom rule by name.
    ///
    /// A rule whose pattern does not compile is still stored (so it can be
    /// fixed by replacing it) but gets no matcher; the compile error is logged
    /// and returned.
    pub fn add_rule(&mut self, rule: RedactionRule) -> Result<()> {
        let (matcher, outcome) = if rule.enabled {
            match compile(&rule) {
                Ok(matcher) => (Some(matcher), Ok(())),
                Err(e) => {
                    warn!("Rule {} stored without matcher: {}", rule.name, e);
                    (None, Err(e))
                }
            }
        } else {
            (None, Ok(()))
        };

        self.insert(CatalogEntry {
            rule,
            origin: RuleOrigin::Custom,
            matcher,
        });
        self.rebuild_active();
        outcome
    }

    /// Remove a rule and its matcher. Returns false if no such rule exists.
    pub fn remove_rule(&mut self, name: &str) -> bool {
        let Some(index) = self.position(name) else {
            warn!("Cannot remove unknown rule: {}", name);
            return false;
        };
        self.entries.remove(index);
        self.rebuild_active();
        true
    }

    /// Enable or disable a rule, compiling or dropping its matcher.
    /// Returns false if no such rule exists.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.rule.name == name) else {
            warn!("Cannot toggle unknown rule: {}", name);
            return false;
        };

        entry.rule.enabled = enabled;
        entry.matcher = compile_logged(&entry.rule);
        debug!("Rule {} enabled={}", name, enabled);

        self.rebuild_active();
        true
    }

    /// Swap the built-in groups for those of `level`, keeping custom rules
    pub fn set_level(&mut self, level: SensitivityLevel) {
        let custom: Vec<CatalogEntry> = self
            .entries
            .drain(..)
            .filter(|e| e.origin == RuleOrigin::Custom)
            .collect();

        self.level = level;
        self.load_builtins();
        for entry in custom {
            self.insert(entry);
        }
        self.rebuild_active();
    }

    /// Disable every rule not tagged with `standard`
    pub fn restrict_to(&mut self, standard: ComplianceStandard) {
        for entry in &mut self.entries {
            if !entry.rule.covers(standard) {
                entry.rule.enabled = false;
                entry.matcher = None;
            }
        }
        self.rebuild_active();
    }

    /// Enabled, compiled rules sorted by priority descending, ties in
    /// insertion order
    pub fn active_rules(&self) -> Arc<[ActiveRule]> {
        Arc::clone(&self.active)
    }

    pub fn get(&self, name: &str) -> Option<&RedactionRule> {
        self.entries
            .iter()
            .find(|e| e.rule.name == name)
            .map(|e| &e.rule)
    }

    pub fn rules(&self) -> Vec<RuleInfo> {
        self.entries
            .iter()
            .map(|e| RuleInfo {
                rule: e.rule.clone(),
                origin: e.origin,
                compiled: e.matcher.is_some(),
            })
            .collect()
    }

    /// Custom rules in insertion order (what gets exported)
    pub fn custom_rules(&self) -> Vec<RedactionRule> {
        self.entries
            .iter()
            .filter(|e| e.origin == RuleOrigin::Custom)
            .map(|e| e.rule.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn load_builtins(&mut self) {
        for builtin in rules_for_level(self.level) {
            let matcher = compile_logged(&builtin.rule);
            self.entries.push(CatalogEntry {
                rule: builtin.rule,
                origin: RuleOrigin::Builtin(builtin.group),
                matcher,
            });
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.rule.name == name)
    }

    // Same-name rules are replaced in their existing slot
    fn insert(&mut self, entry: CatalogEntry) {
        match self.position(&entry.rule.name) {
            Some(index) => {
                debug!("Replacing rule {}", entry.rule.name);
                self.entries[index] = entry;
            }
            None => self.entries.push(entry),
        }
    }

    fn rebuild_active(&mut self) {
        let mut active: Vec<ActiveRule> = self
            .entries
            .iter()
            .filter(|e| e.rule.enabled)
            .filter_map(|e| {
                e.matcher.as_ref().map(|matcher| ActiveRule {
                    rule: e.rule.clone(),
                    matcher: matcher.clone(),
                })
            })
            .collect();

        // Stable: equal priorities keep insertion order
        active.sort_by_key(|a| Reverse(a.rule.priority));
        self.active = Arc::from(active);
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new(SensitivityLevel::default())
    }
}
