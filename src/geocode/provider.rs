//! Upstream geocoding seam.

use async_trait::async_trait;

use crate::error::Result;
use crate::geocode::types::{GeocodeResult, ReverseGeocodeResult};

/// A geocoding backend that resolves addresses to coordinates and back.
///
/// `Ok(None)` means the backend answered but had no match; errors cover
/// transport failures, bad statuses and unusable payloads.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + 'static {
    /// Forward geocode: first match for `address`, if any.
    async fn search(&self, address: &str) -> Result<Option<GeocodeResult>>;

    /// Reverse geocode: normalized address at `lat`,`lng`, if any.
    async fn reverse(&self, lat: f64, lng: f64) -> Result<Option<ReverseGeocodeResult>>;
}
