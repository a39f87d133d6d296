//! Cache Store Module
//!
//! HashMap-backed result cache with age-based validity and a size-triggered
//! sweep of stale entries.

use std::collections::HashMap;

use tracing::info;

use crate::cache::{CacheEntry, CacheStats, DEFAULT_EVICTION_THRESHOLD, DEFAULT_TTL_MS};

// == Cache Store ==
/// Result cache keyed by a normalized query string.
///
/// Timestamps are Unix milliseconds supplied by the caller, so every
/// operation takes an explicit `now`.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Validity window in milliseconds
    ttl_ms: u64,
    /// Size above which `maybe_evict` sweeps
    eviction_threshold: usize,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `ttl_ms` - How long an entry stays valid, in milliseconds
    /// * `eviction_threshold` - Entry count above which stale entries are swept
    pub fn new(ttl_ms: u64, eviction_threshold: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_ms,
            eviction_threshold,
        }
    }

    // == Lookup ==
    /// Returns the cached value for `key` if it is younger than the TTL.
    ///
    /// Expired entries count as misses but are left in place; the next sweep
    /// or a fresh `store` for the same key replaces them.
    pub fn lookup(&mut self, key: &str, now: u64) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(now, self.ttl_ms) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Store ==
    /// Stores `value` under `key`, stamped at `now`, then runs `maybe_evict`.
    ///
    /// Overwrites any existing entry. Returns the number of entries the
    /// sweep removed.
    pub fn store(&mut self, key: String, value: V, now: u64) -> usize {
        self.entries.insert(key, CacheEntry::new(value, now));
        let removed = self.maybe_evict(now);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Maybe Evict ==
    /// Removes every entry older than the TTL, but only when the cache holds
    /// more than `eviction_threshold` entries.
    ///
    /// Returns the number of entries removed.
    pub fn maybe_evict(&mut self, now: u64) -> usize {
        if self.entries.len() <= self.eviction_threshold {
            return 0;
        }

        let before = self.entries.len();
        let ttl_ms = self.ttl_ms;
        self.entries.retain(|_, entry| !entry.is_stale(now, ttl_ms));
        let removed = before - self.entries.len();

        if removed > 0 {
            info!(
                "Cache sweep: removed {} stale entries, {} remain",
                removed,
                self.entries.len()
            );
        }

        self.stats.record_evictions(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS, DEFAULT_EVICTION_THRESHOLD)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: u64 = DEFAULT_TTL_MS;
    const T0: u64 = 1_700_000_000_000;

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::default();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_and_lookup() {
        let mut store = CacheStore::default();

        store.store("reconquista".to_string(), "value1".to_string(), T0);
        let value = store.lookup("reconquista", T0 + 10);

        assert_eq!(value.as_deref(), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_missing() {
        let mut store: CacheStore<String> = CacheStore::default();
        assert!(store.lookup("nonexistent", T0).is_none());
    }

    #[test]
    fn test_lookup_expired_is_miss_but_kept() {
        let mut store = CacheStore::default();
        store.store("key".to_string(), 42u32, T0);

        assert_eq!(store.lookup("key", T0 + TTL - 1), Some(42));
        assert!(store.lookup("key", T0 + TTL).is_none());
        // Not proactively deleted on miss
        assert!(store.contains_key("key"));
    }

    #[test]
    fn test_store_overwrite_refreshes_timestamp() {
        let mut store = CacheStore::default();

        store.store("key".to_string(), 1u32, T0);
        store.store("key".to_string(), 2u32, T0 + TTL);

        assert_eq!(store.lookup("key", T0 + TTL + 5), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_maybe_evict_noop_at_threshold() {
        let mut store = CacheStore::new(TTL, 3);
        for i in 0..3 {
            store.store(format!("key{}", i), i, T0);
        }

        assert_eq!(store.maybe_evict(T0 + 2 * TTL), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_sweep_removes_only_stale_entry() {
        let mut store = CacheStore::default();
        store.store("stale".to_string(), 0usize, T0);

        let now = T0 + TTL + 1;
        let mut removed = 0;
        for i in 0..1000 {
            removed += store.store(format!("fresh{}", i), i, now);
        }

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1000);
        assert!(!store.contains_key("stale"));
        assert!(store.contains_key("fresh0"));
        assert!(store.contains_key("fresh999"));
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_sweep_keeps_entries_exactly_at_ttl() {
        let mut store = CacheStore::new(TTL, 1);
        store.store("old".to_string(), 1u8, T0);
        store.store("new".to_string(), 2u8, T0 + TTL);

        // "old" is exactly TTL old: unusable but not past the TTL yet
        assert!(store.contains_key("old"));
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::default();

        store.store("key1".to_string(), "v".to_string(), T0);
        store.lookup("key1", T0); // hit
        store.lookup("nonexistent", T0); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
