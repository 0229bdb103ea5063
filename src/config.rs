//! Configuration Module
//!
//! Handles loading backend and server configuration from environment variables.

use std::env;

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis server host
    pub redis_host: String,
    /// Redis server port
    pub redis_port: u16,
    /// Redis password, empty for unauthenticated servers
    pub redis_password: String,
    /// HTTP listen port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_HOST` - Redis server host (default: 127.0.0.1)
    /// - `REDIS_PORT` - Redis server port (default: 6379)
    /// - `REDIS_PASSWORD` - Redis password (default: none)
    /// - `APP_PORT` - HTTP listen port (default: 8081)
    pub fn from_env() -> Self {
        Self {
            redis_host: env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            redis_port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6379),
            redis_password: env::var("REDIS_PASSWORD").unwrap_or_default(),
            server_port: env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8081),
        }
    }

    /// Connection URL for the Redis client.
    pub fn redis_url(&self) -> String {
        if self.redis_password.is_empty() {
            format!("redis://{}:{}/", self.redis_host, self.redis_port)
        } else {
            format!(
                "redis://:{}@{}:{}/",
                self.redis_password, self.redis_host, self.redis_port
            )
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_host: "127.0.0.1".to_string(),
            redis_port: 6379,
            redis_password: String::new(),
            server_port: 8081,
        }
    }
}
