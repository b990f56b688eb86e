//! Store Module
//!
//! The key-value store collaborator behind the HTTP facade, plus its backends.

mod entry;
mod memory;
mod redis_store;

use async_trait::async_trait;

use crate::error::StoreError;

pub use entry::StoredEntry;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

// == Key-Value Store Trait ==
/// Minimal key-value contract the facade relies on.
///
/// Implementations own expiry; callers never see an expired value.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key` with no expiration.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Stores `value` under `key`, expiring after `ttl_seconds`.
    async fn setex(&self, key: &str, ttl_seconds: u64, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Returns whether anything was removed.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;
}
