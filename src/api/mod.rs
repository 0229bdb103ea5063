//! API Module
//!
//! HTTP handlers and routing for the gateway.
//!
//! # Endpoints
//! - `POST /:key` - Store the raw request body under the key
//! - `GET /:key` - Retrieve the stored value
//! - `DELETE /:key` - Remove the key

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
