//! API Handlers
//!
//! HTTP request handlers for each geocoding server endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::geocode::{GeoService, NominatimClient, ResultKind};
use crate::models::{
    GeocodeQuery, GeocodeResponse, HealthResponse, ReverseGeocodeQuery, ReverseGeocodeResponse,
    StatsResponse,
};

/// Header carrying how a lookup result was obtained.
pub const RESULT_KIND_HEADER: &str = "x-geocode-result";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide geocoding service
    pub geo: Arc<GeoService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(geo: GeoService) -> Self {
        Self { geo: Arc::new(geo) }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds a Nominatim client and a service with the configured cache and
    /// limiter parameters.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = NominatimClient::from_config(config)?;
        Ok(Self::new(GeoService::from_config(config, Arc::new(client))))
    }
}

fn tagged(kind: ResultKind, body: impl IntoResponse) -> Response {
    ([(RESULT_KIND_HEADER, kind.as_str())], body).into_response()
}

/// Handler for GET /geocode?address=
///
/// Always 200 for a non-blank address; the body holds either the resolved
/// point or the fallback point.
pub async fn geocode_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<GeocodeQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query?;
    let address = query.address()?;
    let resolution = state.geo.geocode(address).await?;

    Ok(tagged(
        resolution.kind,
        Json(GeocodeResponse::from(resolution.result)),
    ))
}

/// Handler for GET /reverse-geocode?lat=&lng=
pub async fn reverse_geocode_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ReverseGeocodeQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query?;
    let (lat, lng) = query.coordinates()?;
    let resolution = state.geo.reverse_geocode(lat, lng).await?;

    Ok(tagged(
        resolution.kind,
        Json(ReverseGeocodeResponse::from(resolution.result)),
    ))
}

/// Handler for GET /stats
///
/// Returns cache statistics for both directions.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.geo.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
