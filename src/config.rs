//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Public Nominatim instance used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the geocoding service
    pub upstream_base_url: String,
    /// Value sent in the `User-Agent` header of every upstream request
    pub user_agent: String,
    /// Country restriction passed as `countrycodes`
    pub country_codes: String,
    /// How long a cached result stays valid, in seconds
    pub cache_ttl_secs: u64,
    /// Cache size above which a stale-entry sweep runs after a store
    pub eviction_threshold: usize,
    /// Minimum spacing between upstream calls of one direction, in milliseconds
    pub min_request_interval_ms: u64,
    /// Optional upstream request timeout in seconds (none by default)
    pub upstream_timeout_secs: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `GEOCODER_BASE_URL` - Geocoding service base URL (default: public Nominatim)
    /// - `GEOCODER_USER_AGENT` - Identifying client header (default: geocode-server/0.1)
    /// - `GEOCODER_COUNTRY_CODES` - Country restriction (default: ar)
    /// - `CACHE_TTL_SECS` - Result validity in seconds (default: 86400)
    /// - `EVICTION_THRESHOLD` - Sweep trigger size (default: 1000)
    /// - `MIN_REQUEST_INTERVAL_MS` - Upstream spacing (default: 1000)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream timeout (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_base_url: env::var("GEOCODER_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.upstream_base_url),
            user_agent: env::var("GEOCODER_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            country_codes: env::var("GEOCODER_COUNTRY_CODES")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.country_codes),
            cache_ttl_secs: parse_var("CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl_secs),
            eviction_threshold: parse_var("EVICTION_THRESHOLD")
                .unwrap_or(defaults.eviction_threshold),
            min_request_interval_ms: parse_var("MIN_REQUEST_INTERVAL_MS")
                .unwrap_or(defaults.min_request_interval_ms),
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS"),
        }
    }

    /// Cache validity as milliseconds, the unit cache timestamps use.
    pub fn cache_ttl_ms(&self) -> u64 {
        self.cache_ttl_secs.saturating_mul(1000)
    }

    /// Limiter spacing as a Duration.
    pub fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: "geocode-server/0.1".to_string(),
            country_codes: "ar".to_string(),
            cache_ttl_secs: 24 * 60 * 60,
            eviction_threshold: 1000,
            min_request_interval_ms: 1000,
            upstream_timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.country_codes, "ar");
        assert_eq!(config.cache_ttl_secs, 86_400);
        assert_eq!(config.eviction_threshold, 1000);
        assert_eq!(config.min_request_interval_ms, 1000);
        assert!(config.upstream_timeout_secs.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("GEOCODER_BASE_URL");
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("EVICTION_THRESHOLD");
        env::remove_var("MIN_REQUEST_INTERVAL_MS");
        env::remove_var("UPSTREAM_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_ttl_secs, 86_400);
        assert_eq!(config.eviction_threshold, 1000);
        assert_eq!(config.min_request_interval_ms, 1000);
    }

    #[test]
    fn test_derived_units() {
        let config = Config::default();
        assert_eq!(config.cache_ttl_ms(), 86_400_000);
        assert_eq!(config.min_request_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let config = Config {
            cache_ttl_secs: u64::MAX,
            ..Config::default()
        };
        assert_eq!(config.cache_ttl_ms(), u64::MAX);
    }
}
