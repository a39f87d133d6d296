//! Fallback Policy
//!
//! The single fixed location served whenever upstream data is unavailable.
//! Every fallback label carries the `fallback` marker plus the reason.

use crate::geocode::types::{GeocodeResult, ResultKind, ReverseGeocodeResult};

pub const FALLBACK_LATITUDE: f64 = -29.15;
pub const FALLBACK_LONGITUDE: f64 = -59.65;

pub const DEFAULT_CITY: &str = "Reconquista";
pub const DEFAULT_PROVINCE: &str = "Santa Fe";
pub const DEFAULT_COUNTRY: &str = "Argentina";

/// Marker present in every fallback display name.
pub const FALLBACK_MARKER: &str = "fallback";

/// Display name for the fallback point, tagged with the reason.
pub fn fallback_label(kind: ResultKind) -> String {
    let reason = match kind {
        ResultKind::FallbackNoMatch => "no match",
        ResultKind::FallbackError => "error",
        ResultKind::FallbackPending | ResultKind::Resolved => "pending",
    };
    format!(
        "{}, {}, {} ({}: {})",
        DEFAULT_CITY, DEFAULT_PROVINCE, DEFAULT_COUNTRY, FALLBACK_MARKER, reason
    )
}

/// Forward fallback: the fixed point with a reason-specific label.
pub fn fallback_geocode(kind: ResultKind) -> GeocodeResult {
    GeocodeResult {
        latitude: FALLBACK_LATITUDE,
        longitude: FALLBACK_LONGITUDE,
        display_name: fallback_label(kind),
    }
}

/// Reverse fallback: default city, province and country, no street data.
pub fn fallback_reverse(kind: ResultKind) -> ReverseGeocodeResult {
    ReverseGeocodeResult {
        street_address: String::new(),
        neighborhood: String::new(),
        city: DEFAULT_CITY.to_string(),
        province: DEFAULT_PROVINCE.to_string(),
        country: DEFAULT_COUNTRY.to_string(),
        display_name: fallback_label(kind),
        formatted_address: format!("{}, {}", DEFAULT_CITY, DEFAULT_PROVINCE),
    }
}

impl Default for GeocodeResult {
    fn default() -> Self {
        fallback_geocode(ResultKind::FallbackPending)
    }
}

impl Default for ReverseGeocodeResult {
    fn default() -> Self {
        fallback_reverse(ResultKind::FallbackPending)
    }
}
