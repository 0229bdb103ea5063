//! Request parameter types for the gateway API
//!
//! Defines the query parameters accepted by the SET operation.

use serde::Deserialize;

use crate::error::GatewayError;

/// Query parameters for the SET operation (POST /:key)
///
/// The expiration is carried as the raw query value; validation happens in
/// [`SetParams::parse_expiration`] so a malformed value maps to the
/// gateway's own error instead of a framework rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetParams {
    /// Optional expiration in seconds
    #[serde(default)]
    pub expiration: Option<String>,
}

impl SetParams {
    /// Parses the expiration parameter.
    ///
    /// Absent or empty means no expiration. Anything else must parse as a
    /// non-negative integer number of seconds.
    pub fn parse_expiration(&self) -> Result<Option<u64>, GatewayError> {
        match self.expiration.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|_| GatewayError::InvalidExpiration),
        }
    }
}
