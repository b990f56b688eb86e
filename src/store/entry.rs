//! Stored Entry Module
//!
//! A single in-memory value with optional expiry.

use std::time::{SystemTime, UNIX_EPOCH};

// == Stored Entry ==
/// A value held by the memory store together with its timestamps.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    /// The stored value
    pub value: String,
    /// Write timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl StoredEntry {
    /// Creates an entry that never expires.
    pub fn persistent(value: String) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
            expires_at: None,
        }
    }

    /// Creates an entry that expires `ttl_seconds` from now.
    pub fn expiring(value: String, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            created_at: now,
            expires_at: Some(now.saturating_add(ttl_seconds.saturating_mul(1000))),
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches its expiry timestamp.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Same as [`is_expired`](Self::is_expired) against a given clock reading.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        matches!(self.expires_at, Some(expires) if now_ms >= expires)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
