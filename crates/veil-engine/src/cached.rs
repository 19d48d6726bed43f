//! Process-wide default redactor with a bounded result cache

use std::num::NonZeroUsize;
use std::sync::LazyLock;

use lru::LruCache;
use parking_lot::Mutex;
use veil_core::{RedactionResult, SensitivityLevel};

use crate::Redactor;

/// Entries kept by `redact_cached` before least-recently-used eviction
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(1024).unwrap();

/// Bounded LRU of redaction results.
///
/// Keyed by catalog generation as well as text, so a mutation of the redactor
/// makes every earlier entry unreachable.
pub struct ResultCache {
    entries: Mutex<LruCache<(u64, String), RedactionResult>>,
}

impl ResultCache {
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Cached result for `text` under the redactor's current catalog,
    /// redacting and storing it on a miss
    pub fn redact(&self, redactor: &Redactor, text: &str) -> RedactionResult {
        let key = (redactor.generation(), text.to_string());

        if let Some(hit) = self.entries.lock().get(&key) {
            return hit.clone();
        }

        let result = redactor.redact_text(text);
        self.entries.lock().put(key, result.clone());
        result
    }

    /// Whether `text` is cached for the redactor's current catalog. Does not
    /// touch recency.
    pub fn contains(&self, redactor: &Redactor, text: &str) -> bool {
        self.entries
            .lock()
            .contains(&(redactor.generation(), text.to_string()))
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.entries.lock().cap()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

static DEFAULT_REDACTOR: LazyLock<Redactor> =
    LazyLock::new(|| Redactor::new(SensitivityLevel::Medium));

static RESULT_CACHE: LazyLock<ResultCache> = LazyLock::new(ResultCache::default);

/// The MEDIUM-level redactor shared by the whole process
pub fn default_redactor() -> &'static Redactor {
    &DEFAULT_REDACTOR
}

/// Redact with the default redactor, reusing the result for repeated inputs
pub fn redact_cached(text: &str) -> RedactionResult {
    RESULT_CACHE.redact(default_redactor(), text)
}

pub fn clear_cache() {
    RESULT_CACHE.clear();
}

pub fn cached_entries() -> usize {
    RESULT_CACHE.len()
}
