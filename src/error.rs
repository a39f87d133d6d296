//! Error types for the geocoding server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Geo Error Enum ==
/// Unified error type for the geocoding server.
///
/// Only `Validation` is ever returned to HTTP clients; upstream and parse
/// failures are absorbed into fallback results by the service.
#[derive(Error, Debug)]
pub enum GeoError {
    /// Missing or malformed request parameters
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Network failure or non-success status from the geocoding service
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream answered with a body we could not interpret
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GeoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GeoError::Parse(err.to_string())
        } else {
            GeoError::Upstream(err.to_string())
        }
    }
}

impl From<QueryRejection> for GeoError {
    fn from(rejection: QueryRejection) -> Self {
        GeoError::Validation(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GeoError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GeoError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            GeoError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            GeoError::Parse(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the geocoding server.
pub type Result<T> = std::result::Result<T, GeoError>;
