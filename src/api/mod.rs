//! API Module
//!
//! HTTP handlers and routing for the geocoding server REST API.
//!
//! # Endpoints
//! - `GET /geocode?address=` - Forward geocoding
//! - `GET /reverse-geocode?lat=&lng=` - Reverse geocoding
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
