//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Message returned whenever a mutating request does not carry JSON.
pub const JSON_REQUIRED_MESSAGE: &str = "Only json data is required.";

// == Store Error Enum ==
/// Failures raised by a key-value store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error reported by the Redis client
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// The backend could not be reached
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

// == Api Error Enum ==
/// Errors surfaced to HTTP callers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Key absent, or expired; the store cannot tell the two apart
    #[error("The key {0} was not found maybe it has expired.")]
    NotFound(String),

    /// Request body is not JSON
    #[error("{}", JSON_REQUIRED_MESSAGE)]
    BadRequest,

    /// JSON body that fails typed validation
    #[error("{0}")]
    InvalidRequest(String),

    /// Method not accepted by the route
    #[error("Only {0} Methods")]
    MethodMismatch(&'static str),

    /// Store rejected a write
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status paired with this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodMismatch(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(status.as_u16(), self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, ApiError>;
