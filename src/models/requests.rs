//! Request DTOs for the geocoding API
//!
//! Query-string parameters of the two lookup endpoints. Fields are optional
//! so that missing parameters produce our own JSON validation error.

use serde::Deserialize;

use crate::error::{GeoError, Result};
use crate::geocode::parse_coordinate;

/// Query for GET /geocode
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeQuery {
    #[serde(default)]
    pub address: Option<String>,
}

impl GeocodeQuery {
    /// Returns the address, rejecting missing or blank values.
    pub fn address(&self) -> Result<&str> {
        self.address
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| GeoError::Validation("Address is required".to_string()))
    }
}

/// Query for GET /reverse-geocode
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeQuery {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
}

impl ReverseGeocodeQuery {
    /// Parses both coordinates as finite numbers.
    pub fn coordinates(&self) -> Result<(f64, f64)> {
        let lat = parse_coordinate("lat", self.lat.as_deref())?;
        let lng = parse_coordinate("lng", self.lng.as_deref())?;
        Ok((lat, lng))
    }
}
