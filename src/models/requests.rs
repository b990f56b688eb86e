//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Serialize};

use crate::store::MAX_KEY_LENGTH;

/// Request body for `POST /add-key` and `PUT|PATCH /update`.
///
/// Re-serialized as the `data` of the success response; unknown fields
/// and a null `expiresIn` are not carried over.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WriteKeyRequest {
    /// The key to write
    pub key: String,
    /// The value to store
    pub value: String,
    /// Optional lifetime in seconds
    #[serde(rename = "expiresIn", default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

impl WriteKeyRequest {
    /// Effective TTL: `expiresIn` of zero counts as no expiration.
    pub fn ttl(&self) -> Option<u64> {
        self.expires_in.filter(|&seconds| seconds > 0)
    }

    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Request body for `DELETE /delete`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteKeyRequest {
    /// The key to remove
    pub key: String,
}

impl DeleteKeyRequest {
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} characters",
            MAX_KEY_LENGTH
        ));
    }
    None
}
