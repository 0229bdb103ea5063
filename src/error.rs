//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::BackendError;

// == Gateway Error Enum ==
/// Unified error type for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Key path parameter was empty
    #[error("Missing key")]
    MissingKey,

    /// Expiration query parameter was not a non-negative integer
    #[error("Invalid expiration value")]
    InvalidExpiration,

    /// Request body could not be read to completion
    #[error("Failed to read body")]
    BodyRead,

    /// Key absent or expired in the backend
    #[error("Key not found")]
    NotFound,

    /// Backend rejected or failed the operation; message surfaced verbatim
    #[error("{0}")]
    Backend(#[from] BackendError),
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::MissingKey | GatewayError::InvalidExpiration => StatusCode::BAD_REQUEST,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::BodyRead | GatewayError::Backend(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;
