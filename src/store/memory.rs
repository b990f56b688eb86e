//! Memory Store Module
//!
//! In-process backend: a HashMap of entries with lazy and periodic expiry.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::entry::{current_timestamp_ms, StoredEntry};
use super::KvStore;
use crate::error::StoreError;

// == Memory Store ==
/// Key-value storage held in process memory.
///
/// Expired entries are never returned; they are dropped on the next write to
/// the same key, on delete, or by [`cleanup_expired`](Self::cleanup_expired).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let now = current_timestamp_ms();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    /// Number of entries held, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn insert(&self, key: &str, entry: StoredEntry) {
        self.entries.write().await.insert(key.to_string(), entry);
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().await;
        let value = entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone());

        debug!("MEM GET {} -> {}", key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        debug!("MEM SET {}", key);
        self.insert(key, StoredEntry::persistent(value.to_string())).await;
        Ok(())
    }

    async fn setex(&self, key: &str, ttl_seconds: u64, value: &str) -> Result<(), StoreError> {
        debug!("MEM SETEX {} {}", key, ttl_seconds);
        self.insert(key, StoredEntry::expiring(value.to_string(), ttl_seconds))
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        debug!("MEM DEL {}", key);
        let removed = self.entries.write().await.remove(key);
        Ok(matches!(removed, Some(entry) if !entry.is_expired()))
    }
}
