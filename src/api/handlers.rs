//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Each handler validates
//! its input, performs exactly one backend round trip, and translates the
//! outcome into a status and plain-text or raw-byte body.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Query, State},
};
use bytes::Bytes;

use crate::backend::KvBackend;
use crate::error::{GatewayError, Result};
use crate::models::SetParams;

/// Application state shared across all handlers.
///
/// Holds the backend handle behind an Arc; implementations are internally
/// synchronized, so the handle is shared across concurrent requests without
/// additional locking.
#[derive(Clone)]
pub struct AppState {
    /// Shared backend connection handle
    pub backend: Arc<dyn KvBackend>,
}

impl AppState {
    /// Creates a new AppState around the given backend.
    pub fn new(backend: impl KvBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}

/// Handler for POST /:key
///
/// Stores the raw request body under the key, overwriting any existing
/// value, with an optional expiration in seconds.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<SetParams>,
    body: Body,
) -> Result<String> {
    if key.is_empty() {
        return Err(GatewayError::MissingKey);
    }

    // Validate the expiration parameter before touching the body
    let expiration = params.parse_expiration()?;

    // Consume the whole payload up front; a short read fails the request
    // rather than storing a truncated value
    let value = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| GatewayError::BodyRead)?;

    state.backend.set(&key, value, expiration).await?;

    Ok(format!("Key '{}' set successfully", key))
}

/// Handler for GET /:key
///
/// Returns the stored bytes verbatim, with no decoding or transformation.
pub async fn get_handler(State(state): State<AppState>, Path(key): Path<String>) -> Result<Bytes> {
    if key.is_empty() {
        return Err(GatewayError::MissingKey);
    }

    match state.backend.get(&key).await? {
        Some(value) => Ok(value),
        None => Err(GatewayError::NotFound),
    }
}

/// Handler for DELETE /:key
///
/// Removes the entry if present; deleting an absent key still succeeds.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<String> {
    if key.is_empty() {
        return Err(GatewayError::MissingKey);
    }

    state.backend.delete(&key).await?;

    Ok(format!("Key '{}' deleted successfully", key))
}
