//! Backend Module
//!
//! Abstraction over the key-value store the gateway forwards to.
//!
//! Every gateway operation is a single round trip through [`KvBackend`].
//! The production implementation talks to Redis; an in-memory implementation
//! backs the test suite.

mod memory;
mod redis;


pub use memory::MemoryBackend;
pub use self::redis::RedisBackend;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

// == Backend Error ==
/// Errors reported by a backend implementation.
///
/// Messages render verbatim so handlers can surface the backend's own
/// error text to the caller.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection could not be established or was lost mid-command
    #[error("{0}")]
    Connection(String),

    /// The store rejected or failed the command
    #[error("{0}")]
    Operation(String),
}

// == Backend Trait ==
/// Key-value store operations the gateway depends on.
///
/// Implementations must be safe for concurrent use from many tasks without
/// external synchronization; the gateway shares one handle across all
/// in-flight requests.
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Stores `value` under `key`, overwriting any existing value.
    ///
    /// A positive `expiration` removes the entry after that many seconds;
    /// `None` or zero persists it until deleted or overwritten.
    async fn set(&self, key: &str, value: Bytes, expiration: Option<u64>)
        -> Result<(), BackendError>;

    /// Looks up the current value for `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or expired, which is
    /// indistinguishable from a key that was never set.
    async fn get(&self, key: &str) -> Result<Option<Bytes>, BackendError>;

    /// Removes the entry for `key` if present. Removing an absent key
    /// succeeds.
    async fn delete(&self, key: &str) -> Result<(), BackendError>;

    /// Verifies the backend is reachable.
    async fn ping(&self) -> Result<(), BackendError>;
}
