//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::IpAddr;
use std::str::FromStr;

use tracing::warn;

/// Which store backend serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// A Redis server at `REDIS_URL`
    Redis,
    /// In-process map, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Store backend selection
    pub store_backend: StoreBackend,
    /// Redis connection URL
    pub redis_url: String,
    /// Memory-store cleanup interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `STORE_BACKEND` - `redis` or `memory` (default: redis)
    /// - `REDIS_URL` - Redis URL (default: redis://127.0.0.1:6379)
    /// - `CLEANUP_INTERVAL` - Memory-store sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("{}, falling back to redis", err);
                StoreBackend::Redis
            }),
            Err(_) => defaults.store_backend,
        };

        Self {
            server_host: parsed_var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
            store_backend,
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            cleanup_interval: parsed_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: IpAddr::from([0, 0, 0, 0]),
            server_port: 3001,
            store_backend: StoreBackend::Redis,
            redis_url: "redis://127.0.0.1:6379".to_string(),
            cleanup_interval: 1,
        }
    }
}
