//! Memory Backend
//!
//! In-process key-value store with lazy expiry. Backs the test suite and
//! gives handlers a backend to run against without a Redis server.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::backend::{BackendError, KvBackend};

// == Stored Entry ==
/// A stored value with its expiration metadata.
#[derive(Debug, Clone)]
struct StoredEntry {
    /// The stored value
    value: Bytes,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    expires_at: Option<u64>,
}

impl StoredEntry {
    fn new(value: Bytes, expiration_secs: Option<u64>) -> Self {
        // Zero expiration means no expiration, matching the SET semantics
        // of the production backend.
        let expires_at = expiration_secs
            .filter(|secs| *secs > 0)
            .map(|secs| current_timestamp_ms() + secs * 1000);

        Self { value, expires_at }
    }

    /// An entry is expired once the current time reaches its expiration time.
    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Memory Backend ==
/// In-memory key-value store.
///
/// Overwrites reset expiration, expired entries read as absent, deletes are
/// idempotent. Concurrent access goes through an async `RwLock`, satisfying
/// the shared-handle contract of [`KvBackend`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current number of live entries (expired entries excluded).
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|entry| !entry.is_expired()).count()
    }

    /// Returns true if no live entries remain.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl KvBackend for MemoryBackend {
    async fn set(
        &self,
        key: &str,
        value: Bytes,
        expiration: Option<u64>,
    ) -> Result<(), BackendError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), StoredEntry::new(value, expiration));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, BackendError> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Expired entry: remove it so the key reads as never set.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| entry.is_expired()) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn delete(&self, key: &str) -> Result<(), BackendError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

// == Helper Functions ==
/// Returns the current Unix timestamp in milliseconds.
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as u64
}
