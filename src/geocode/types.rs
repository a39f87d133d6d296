//! Geocoding result types shared by the cache, the upstream client and the API.

use serde::Serialize;

/// Coordinates resolved from an address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// Normalized address resolved from a coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReverseGeocodeResult {
    pub street_address: String,
    pub neighborhood: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub display_name: String,
    pub formatted_address: String,
}

// == Result Kind ==
/// How a result was obtained.
///
/// Fallback results are structurally identical to resolved ones; this tag is
/// what lets callers and logs tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultKind {
    /// Upstream returned a usable match
    Resolved,
    /// Upstream answered but had nothing for the query
    FallbackNoMatch,
    /// Upstream failed or answered with something unusable
    FallbackError,
    /// Placeholder for a query that has not been resolved yet
    FallbackPending,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Resolved => "resolved",
            ResultKind::FallbackNoMatch => "fallback-no-match",
            ResultKind::FallbackError => "fallback-error",
            ResultKind::FallbackPending => "fallback-pending",
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, ResultKind::Resolved)
    }
}

/// A result tagged with how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<T> {
    pub result: T,
    pub kind: ResultKind,
}

impl<T> Resolution<T> {
    pub fn resolved(result: T) -> Self {
        Self {
            result,
            kind: ResultKind::Resolved,
        }
    }
}
