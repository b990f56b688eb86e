//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::requests::WriteKeyRequest;

/// Response body for `GET /api/v1/:key`
#[derive(Debug, Clone, Serialize)]
pub struct GetValueResponse {
    /// The stored value
    pub value: String,
}

impl GetValueResponse {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Response body for a successful add or update: `{code: 200, data}`.
#[derive(Debug, Clone, Serialize)]
pub struct WriteResponse {
    pub code: u16,
    /// The typed request, re-serialized
    pub data: WriteKeyRequest,
}

impl WriteResponse {
    pub fn ok(data: WriteKeyRequest) -> Self {
        Self { code: 200, data }
    }
}

/// Response body for `DELETE /api/v1/delete`.
///
/// Serializes as a single-field object keyed by the deleted key:
/// `{"<key>": "deleted"}`.
#[derive(Debug, Clone)]
pub struct DeleteResponse {
    pub key: String,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Serialize for DeleteResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, "deleted")?;
        map.end()
    }
}

/// Response body for `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct MetaResponse {
    pub programmer: String,
    pub main: String,
    pub description: String,
    pub language: String,
    pub libraries: Vec<String>,
    pub version: String,
}

impl MetaResponse {
    /// Metadata describing this process.
    pub fn current() -> Self {
        Self {
            programmer: env!("CARGO_PKG_AUTHORS").to_string(),
            main: "Axum, Docker and Redis".to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            language: "rust".to_string(),
            libraries: vec!["axum".to_string(), "redis".to_string()],
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error body for all error conditions: `{code, message}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub code: u16,
    /// Human-readable description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
