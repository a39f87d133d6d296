//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with age-based validity.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A cached geocoding result together with the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now` (Unix milliseconds).
    pub fn new(value: V, now: u64) -> Self {
        Self {
            value,
            stored_at: now,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    ///
    /// Saturates at zero if `now` is earlier than `stored_at`.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.stored_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry is still valid.
    ///
    /// Boundary condition: an entry is valid while its age is strictly less
    /// than the TTL. At exactly `ttl_ms` it is no longer returned.
    pub fn is_fresh(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) < ttl_ms
    }

    // == Is Stale ==
    /// Checks whether the sweep should remove this entry (age exceeds the TTL).
    pub fn is_stale(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) > ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch yields 0.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
