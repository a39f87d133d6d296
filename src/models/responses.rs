//! Response DTOs for the geocoding API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::geocode::{GeoStats, GeocodeResult, ReverseGeocodeResult};

/// Response body for GET /geocode
#[derive(Debug, Clone, Serialize)]
pub struct GeocodeResponse {
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
}

impl From<GeocodeResult> for GeocodeResponse {
    fn from(result: GeocodeResult) -> Self {
        Self {
            lat: result.latitude,
            lng: result.longitude,
            display_name: result.display_name,
        }
    }
}

/// Response body for GET /reverse-geocode
#[derive(Debug, Clone, Serialize)]
pub struct ReverseGeocodeResponse {
    /// Street and house number
    pub address: String,
    pub neighborhood: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub display_name: String,
    pub formatted_address: String,
}

impl From<ReverseGeocodeResult> for ReverseGeocodeResponse {
    fn from(result: ReverseGeocodeResult) -> Self {
        Self {
            address: result.street_address,
            neighborhood: result.neighborhood,
            city: result.city,
            province: result.province,
            country: result.country,
            display_name: result.display_name,
            formatted_address: result.formatted_address,
        }
    }
}

/// Statistics of one direction's cache
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub forward: CacheStatsResponse,
    pub reverse: CacheStatsResponse,
}

impl From<GeoStats> for StatsResponse {
    fn from(stats: GeoStats) -> Self {
        Self {
            forward: stats.forward.into(),
            reverse: stats.reverse.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for validation failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geocode_response_field_names() {
        let resp = GeocodeResponse::from(GeocodeResult {
            latitude: -29.15,
            longitude: -59.65,
            display_name: "Reconquista".to_string(),
        });
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({ "lat": -29.15, "lng": -59.65, "display_name": "Reconquista" })
        );
    }

    #[test]
    fn test_reverse_response_renames_street_address() {
        let resp = ReverseGeocodeResponse::from(ReverseGeocodeResult {
            street_address: "Calle Habegger 1020".to_string(),
            ..Default::default()
        });
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["address"], "Calle Habegger 1020");
        assert_eq!(value["city"], "Reconquista");
        for field in ["neighborhood", "province", "country", "display_name", "formatted_address"] {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn test_cache_stats_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            total_entries: 100,
        };
        let resp = CacheStatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Address is required");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Address is required"}"#);
    }
}
