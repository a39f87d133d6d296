//! Geocoding Module
//!
//! Forward (address → coordinates) and reverse (coordinates → address)
//! geocoding, each with its own cache and rate limiter, backed by a
//! Nominatim-compatible upstream and a fixed fallback location.

mod fallback;
mod key;
mod limiter;
mod nominatim;
mod provider;
mod service;
mod types;

pub use fallback::{
    fallback_geocode, fallback_label, fallback_reverse, DEFAULT_CITY, DEFAULT_COUNTRY,
    DEFAULT_PROVINCE, FALLBACK_LATITUDE, FALLBACK_LONGITUDE, FALLBACK_MARKER,
};
pub use key::{coordinate_key, normalize_address, parse_coordinate};
pub use limiter::{RateLimiter, DEFAULT_MIN_INTERVAL};
pub use nominatim::{map_address, AddressDetails, NominatimClient};
pub use provider::GeocodingProvider;
pub use service::{GeoService, GeoStats};
pub use types::{GeocodeResult, Resolution, ResultKind, ReverseGeocodeResult};
