//! Cumulative performance counters shared by concurrent redactions

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a redactor's counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Non-empty texts processed
    pub total_calls: u64,
    /// Matches replaced across all calls
    pub total_redactions: u64,
    /// Rule name -> matches replaced, sorted by name
    pub rule_hits: BTreeMap<String, u64>,
    pub total_processing_ms: f64,
}

impl PerformanceStats {
    pub fn average_processing_ms(&self) -> f64 {
        if self.total_calls == 0 {
            0.0
        } else {
            self.total_processing_ms / self.total_calls as f64
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    total_calls: AtomicU64,
    total_redactions: AtomicU64,
    total_processing_ns: AtomicU64,
    rule_hits: DashMap<String, u64>,
}

impl StatsRecorder {
    pub(crate) fn record(&self, redactions: &BTreeMap<String, usize>, elapsed_ns: u64) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        self.total_processing_ns
            .fetch_add(elapsed_ns, Ordering::Relaxed);

        for (name, &count) in redactions {
            self.total_redactions
                .fetch_add(count as u64, Ordering::Relaxed);
            *self.rule_hits.entry(name.clone()).or_insert(0) += count as u64;
        }
    }

    pub(crate) fn snapshot(&self) -> PerformanceStats {
        PerformanceStats {
            total_calls: self.total_calls.load(Ordering::Relaxed),
            total_redactions: self.total_redactions.load(Ordering::Relaxed),
            rule_hits: self
                .rule_hits
                .iter()
                .map(|entry| (entry.key().clone(), *entry.value()))
                .collect(),
            total_processing_ms: self.total_processing_ns.load(Ordering::Relaxed) as f64
                / 1_000_000.0,
        }
    }

    pub(crate) fn reset(&self) {
        self.total_calls.store(0, Ordering::Relaxed);
        self.total_redactions.store(0, Ordering::Relaxed);
        self.total_processing_ns.store(0, Ordering::Relaxed);
        self.rule_hits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_snapshot() {
        let recorder = StatsRecorder::default();
        let mut hits = BTreeMap::new();
        hits.insert("ssn_full".to_string(), 2);
        hits.insert("email_address".to_string(), 1);

        recorder.record(&hits, 2_000_000);
        recorder.record(&BTreeMap::new(), 1_000_000);

        let stats = recorder.snapshot();
        assert_eq!(stats.total_calls, 2);
        assert_eq!(stats.total_redactions, 3);
        assert_eq!(stats.rule_hits["ssn_full"], 2);
        assert!((stats.total_processing_ms - 3.0).abs() < 1e-9);
        assert!((stats.average_processing_ms() - 1.5).abs() < 1e-9);

        recorder.reset();
        assert_eq!(recorder.snapshot(), PerformanceStats::default());
    }
}
