//! Redis Store Module
//!
//! Production backend talking to a Redis server.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, error, info};

use super::KvStore;
use crate::error::StoreError;

/// Key-value store backed by Redis.
///
/// Holds a [`ConnectionManager`], which reconnects on its own and is cloned
/// per call.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    /// Connects to the Redis server at `url` (e.g. `redis://127.0.0.1:6379`).
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        debug!("Creating Redis client for URL: {}", url);

        let client = redis::Client::open(url).map_err(|e| {
            error!("Failed to create Redis client: {}", e);
            StoreError::ConnectionFailed(format!("Failed to create Redis client: {}", e))
        })?;

        let connection = ConnectionManager::new(client).await.map_err(|e| {
            error!("Failed to connect to Redis: {}", e);
            StoreError::ConnectionFailed(format!("Failed to connect to Redis: {}", e))
        })?;

        info!("Connected to Redis");
        Ok(Self { connection })
    }

    fn connection(&self) -> ConnectionManager {
        self.connection.clone()
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        debug!("REDIS GET {}", key);
        let value: Option<String> = self.connection().get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        debug!("REDIS SET {}", key);
        let _: () = self.connection().set(key, value).await?;
        Ok(())
    }

    async fn setex(&self, key: &str, ttl_seconds: u64, value: &str) -> Result<(), StoreError> {
        debug!("REDIS SETEX {} {}", key, ttl_seconds);
        let _: () = self.connection().set_ex(key, value, ttl_seconds).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        debug!("REDIS DEL {}", key);
        let removed: i64 = self.connection().del(key).await?;
        Ok(removed > 0)
    }
}
