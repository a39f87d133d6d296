//! Request and Response models for the geocoding API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query strings and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{GeocodeQuery, ReverseGeocodeQuery};
pub use responses::{
    CacheStatsResponse, ErrorResponse, GeocodeResponse, HealthResponse, ReverseGeocodeResponse,
    StatsResponse,
};
