//! Redis Backend
//!
//! Production backend over the `redis` crate's multiplexed connection manager.

use async_trait::async_trait;
use bytes::Bytes;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::backend::{BackendError, KvBackend};
use crate::config::Config;

// == Redis Backend ==
/// Handle to a Redis server.
///
/// `ConnectionManager` multiplexes all commands over a single connection and
/// reconnects on failure; cloning the handle is cheap and every clone is safe
/// to use concurrently, so no locking happens at this layer.
#[derive(Clone)]
pub struct RedisBackend {
    conn: ConnectionManager,
}

impl RedisBackend {
    // == Connect ==
    /// Opens a connection to the Redis server described by `config`.
    pub async fn connect(config: &Config) -> Result<Self, BackendError> {
        let client = Client::open(config.redis_url())
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl KvBackend for RedisBackend {
    async fn set(
        &self,
        key: &str,
        value: Bytes,
        expiration: Option<u64>,
    ) -> Result<(), BackendError> {
        let mut conn = self.conn.clone();

        // SET with EX only for a positive expiration; zero or absent means
        // the entry persists until deleted or overwritten.
        match expiration {
            Some(secs) if secs > 0 => conn.set_ex::<_, _, ()>(key, value.as_ref(), secs).await,
            _ => conn.set::<_, _, ()>(key, value.as_ref()).await,
        }
        .map_err(|e| BackendError::Operation(e.to_string()))
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, BackendError> {
        let mut conn = self.conn.clone();

        // A nil reply maps to None, the backend's "not found" signal.
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| BackendError::Operation(e.to_string()))?;

        Ok(value.map(Bytes::from))
    }

    async fn delete(&self, key: &str) -> Result<(), BackendError> {
        let mut conn = self.conn.clone();

        // DEL of a missing key replies 0, which is still a success.
        conn.del::<_, ()>(key)
            .await
            .map_err(|e| BackendError::Operation(e.to_string()))
    }

    async fn ping(&self) -> Result<(), BackendError> {
        let mut conn = self.conn.clone();

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        Ok(())
    }
}
