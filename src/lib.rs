//! Geocode Server - Cached forward and reverse geocoding for property listings
//!
//! Wraps a public Nominatim-style service with 24-hour result caches,
//! per-direction rate limiting and a fixed fallback location.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod geocode;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use geocode::GeoService;
