//! Error types for the prime server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Prime Error Enum ==
/// Unified error type for the prime server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimeError {
    /// Negative bound or `lower > upper` on a query
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Service could not be built from the supplied configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for PrimeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PrimeError::InvalidRange(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            PrimeError::InvalidConfiguration(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            PrimeError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the prime server.
pub type Result<T> = std::result::Result<T, PrimeError>;
