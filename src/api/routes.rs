//! API Routes
//!
//! Configures the Axum router with the gateway endpoints.

use axum::{routing::post, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{delete_handler, get_handler, set_handler, AppState};

/// Creates the gateway router.
///
/// # Endpoints
/// - `POST /:key` - Store the raw request body under the key
/// - `GET /:key` - Retrieve the stored value
/// - `DELETE /:key` - Remove the key
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // All three verbs bind to the same path-addressed key
    Router::new()
        .route(
            "/:key",
            post(set_handler).get(get_handler).delete(delete_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
