//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key normalization, validity windows and the
//! stale-entry sweep against arbitrary inputs.

use proptest::prelude::*;

use crate::cache::{CacheStore, DEFAULT_EVICTION_THRESHOLD, DEFAULT_TTL_MS};
use crate::geocode::{coordinate_key, normalize_address};

// == Test Configuration ==
const T0: u64 = 1_700_000_000_000;

// == Strategies ==
/// Generates plausible street addresses
fn address_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 .,]{0,40}[A-Za-z0-9]".prop_map(|s| s)
}

/// Generates leading/trailing whitespace padding
fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}".prop_map(|s| s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Padding and letter case never change the forward cache key, so the
    // second spelling is served from the entry stored for the first.
    #[test]
    fn prop_normalized_addresses_hit_same_entry(
        address in address_strategy(),
        left in padding_strategy(),
        right in padding_strategy(),
        upper in any::<bool>(),
    ) {
        let variant = if upper { address.to_uppercase() } else { address.to_lowercase() };
        let variant = format!("{}{}{}", left, variant, right);

        let mut store = CacheStore::default();
        let key = normalize_address(&address).unwrap();
        store.store(key, address.clone(), T0);

        let variant_key = normalize_address(&variant).unwrap();
        prop_assert_eq!(store.lookup(&variant_key, T0 + 1), Some(address));
    }

    // Coordinates equal to six decimal places share a reverse cache key.
    #[test]
    fn prop_coordinate_key_six_decimals(
        lat in -90_000_000i64..90_000_000,
        lng in -180_000_000i64..180_000_000,
        jitter in -4i64..=4,
    ) {
        let base_lat = lat as f64 / 1e6;
        let base_lng = lng as f64 / 1e6;
        let nudged_lat = base_lat + jitter as f64 * 1e-8;

        prop_assert_eq!(
            coordinate_key(base_lat, base_lng),
            coordinate_key(nudged_lat, base_lng)
        );
    }

    // An entry is served strictly before its TTL elapses and never after.
    #[test]
    fn prop_lookup_respects_ttl(age in 0u64..(2 * DEFAULT_TTL_MS)) {
        let mut store = CacheStore::default();
        store.store("key".to_string(), 7u32, T0);

        let found = store.lookup("key", T0 + age);
        prop_assert_eq!(found.is_some(), age < DEFAULT_TTL_MS);
    }

    // Once the cache grows past the threshold, the sweep removes exactly the
    // entries older than the TTL and keeps every fresh one.
    #[test]
    fn prop_sweep_removes_only_stale(stale_count in 1usize..20, extra_fresh in 0usize..20) {
        let mut store = CacheStore::default();
        for i in 0..stale_count {
            store.store(format!("stale{}", i), i, T0);
        }

        let now = T0 + DEFAULT_TTL_MS + 1;
        let fresh_count = DEFAULT_EVICTION_THRESHOLD + 1 - stale_count + extra_fresh;
        let mut removed = 0;
        for i in 0..fresh_count {
            removed += store.store(format!("fresh{}", i), i, now);
        }

        prop_assert_eq!(removed, stale_count);
        prop_assert_eq!(store.len(), fresh_count);
        for i in 0..fresh_count {
            let key = format!("fresh{}", i);
            prop_assert!(store.contains_key(&key), "missing {}", key);
        }
        prop_assert_eq!(store.stats().evictions, stale_count as u64);
    }
}
