//! Request models for the gateway API
//!
//! Success responses are plain text and raw bytes, so only the request side
//! carries a typed model: the query parameters of the SET operation.

pub mod requests;

pub use requests::SetParams;
