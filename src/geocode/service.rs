//! Geocoding Service
//!
//! Ties the caches, rate limiters, upstream provider and fallback policy
//! together for both directions. One instance is built at startup and shared
//! by every request handler.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{current_timestamp_ms, CacheStats, CacheStore};
use crate::config::Config;
use crate::error::{GeoError, Result};
use crate::geocode::fallback::{fallback_geocode, fallback_reverse};
use crate::geocode::key::{coordinate_key, normalize_address};
use crate::geocode::limiter::RateLimiter;
use crate::geocode::provider::GeocodingProvider;
use crate::geocode::types::{GeocodeResult, Resolution, ResultKind, ReverseGeocodeResult};

/// Source of Unix-millisecond timestamps for cache lookups and writes.
pub type Clock = Arc<dyn Fn() -> u64 + Send + Sync>;

type ForwardCache = CacheStore<Resolution<GeocodeResult>>;
type ReverseCache = CacheStore<Resolution<ReverseGeocodeResult>>;

/// Cache statistics for both directions.
#[derive(Debug, Clone, Serialize)]
pub struct GeoStats {
    pub forward: CacheStats,
    pub reverse: CacheStats,
}

// == Geo Service ==
/// Cached, rate-limited forward and reverse geocoding.
///
/// Cache locks are never held across an upstream call, so concurrent misses
/// on the same key may each reach upstream; the last one to finish wins.
pub struct GeoService {
    provider: Arc<dyn GeocodingProvider>,
    forward_cache: RwLock<ForwardCache>,
    reverse_cache: RwLock<ReverseCache>,
    forward_limiter: RateLimiter,
    reverse_limiter: RateLimiter,
    clock: Clock,
}

impl GeoService {
    // == Constructor ==
    /// Creates a service with independent caches and limiters per direction.
    ///
    /// # Arguments
    /// * `provider` - Upstream geocoding backend
    /// * `ttl_ms` - Validity window of cached results
    /// * `eviction_threshold` - Cache size above which stale entries are swept
    /// * `min_interval` - Minimum spacing between upstream calls per direction
    pub fn new(
        provider: Arc<dyn GeocodingProvider>,
        ttl_ms: u64,
        eviction_threshold: usize,
        min_interval: Duration,
    ) -> Self {
        Self {
            provider,
            forward_cache: RwLock::new(CacheStore::new(ttl_ms, eviction_threshold)),
            reverse_cache: RwLock::new(CacheStore::new(ttl_ms, eviction_threshold)),
            forward_limiter: RateLimiter::new(min_interval),
            reverse_limiter: RateLimiter::new(min_interval),
            clock: Arc::new(current_timestamp_ms),
        }
    }

    /// Replaces the wall clock used to stamp and age cache entries.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn now(&self) -> u64 {
        (self.clock)()
    }

    pub fn from_config(config: &Config, provider: Arc<dyn GeocodingProvider>) -> Self {
        Self::new(
            provider,
            config.cache_ttl_ms(),
            config.eviction_threshold,
            config.min_request_interval(),
        )
    }

    // == Forward ==
    /// Resolves an address to coordinates.
    ///
    /// Fails only on a blank address; every upstream problem yields the
    /// fallback point instead.
    ///
    /// Entries are stamped when the upstream answer arrives, not when the
    /// request came in.
    pub async fn geocode(&self, address: &str) -> Result<Resolution<GeocodeResult>> {
        let key = normalize_address(address)
            .ok_or_else(|| GeoError::Validation("Address is required".to_string()))?;

        let now = self.now();
        if let Some(cached) = self.forward_cache.write().await.lookup(&key, now) {
            debug!("Forward cache hit for '{}'", key);
            return Ok(cached);
        }
        debug!("Forward cache miss for '{}'", key);

        match self.fetch_forward(address.trim()).await {
            Ok(resolution) => {
                if resolution.kind.is_fallback() {
                    warn!("No geocoding match for '{}', using fallback location", key);
                }
                let stored_at = self.now();
                self.forward_cache
                    .write()
                    .await
                    .store(key, resolution.clone(), stored_at);
                Ok(resolution)
            }
            Err(err) => {
                warn!("Geocoding failed for '{}': {}", key, err);
                Ok(Resolution {
                    result: fallback_geocode(ResultKind::FallbackError),
                    kind: ResultKind::FallbackError,
                })
            }
        }
    }

    async fn fetch_forward(&self, address: &str) -> Result<Resolution<GeocodeResult>> {
        self.forward_limiter.wait().await;
        let resolution = match self.provider.search(address).await? {
            Some(result) => Resolution::resolved(result),
            None => Resolution {
                result: fallback_geocode(ResultKind::FallbackNoMatch),
                kind: ResultKind::FallbackNoMatch,
            },
        };
        Ok(resolution)
    }

    // == Reverse ==
    /// Resolves a coordinate pair to a normalized address.
    ///
    /// Fails only on non-finite coordinates; every upstream problem yields the
    /// fixed "not found" or "error" result instead.
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Resolution<ReverseGeocodeResult>> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoError::Validation(
                "Latitude and longitude must be finite numbers".to_string(),
            ));
        }
        let key = coordinate_key(lat, lng);

        let now = self.now();
        if let Some(cached) = self.reverse_cache.write().await.lookup(&key, now) {
            debug!("Reverse cache hit for '{}'", key);
            return Ok(cached);
        }
        debug!("Reverse cache miss for '{}'", key);

        match self.fetch_reverse(lat, lng).await {
            Ok(resolution) => {
                if resolution.kind.is_fallback() {
                    warn!("No address found at {}, using fallback address", key);
                }
                let stored_at = self.now();
                self.reverse_cache
                    .write()
                    .await
                    .store(key, resolution.clone(), stored_at);
                Ok(resolution)
            }
            Err(err) => {
                warn!("Reverse geocoding failed for {}: {}", key, err);
                Ok(Resolution {
                    result: fallback_reverse(ResultKind::FallbackError),
                    kind: ResultKind::FallbackError,
                })
            }
        }
    }

    async fn fetch_reverse(&self, lat: f64, lng: f64) -> Result<Resolution<ReverseGeocodeResult>> {
        self.reverse_limiter.wait().await;
        let resolution = match self.provider.reverse(lat, lng).await? {
            Some(result) => Resolution::resolved(result),
            None => Resolution {
                result: fallback_reverse(ResultKind::FallbackNoMatch),
                kind: ResultKind::FallbackNoMatch,
            },
        };
        Ok(resolution)
    }

    // == Stats ==
    pub async fn stats(&self) -> GeoStats {
        GeoStats {
            forward: self.forward_cache.read().await.stats(),
            reverse: self.reverse_cache.read().await.stats(),
        }
    }
}
