//! API Routes
//!
//! Configures the Axum router with all geocoding server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    geocode_handler, health_handler, reverse_geocode_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /geocode?address=` - Address to coordinates
/// - `GET /reverse-geocode?lat=&lng=` - Coordinates to address
/// - `GET /stats` - Cache statistics for both directions
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/geocode", get(geocode_handler))
        .route("/reverse-geocode", get(reverse_geocode_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
