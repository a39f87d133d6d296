//! Cache Module
//!
//! Provides the in-memory result cache with a 24-hour validity window and a
//! size-triggered sweep of stale entries.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Validity window of a cached result in milliseconds (24 hours)
pub const DEFAULT_TTL_MS: u64 = 24 * 60 * 60 * 1000;

/// Entry count above which a store triggers a stale-entry sweep
pub const DEFAULT_EVICTION_THRESHOLD: usize = 1000;
