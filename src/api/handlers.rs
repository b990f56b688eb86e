//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, warn};

use super::extract::JsonBody;
use crate::error::{ApiError, Result};
use crate::models::{
    DeleteKeyRequest, DeleteResponse, GetValueResponse, HealthResponse, MetaResponse,
    WriteKeyRequest, WriteResponse,
};
use crate::store::{KvStore, MemoryStore};

/// Application state shared across all handlers.
///
/// Holds the injected store handle; handlers keep no other state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
}

impl AppState {
    /// Creates a new AppState around the given store handle.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-process store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

/// Reads `key`, folding store failures into absence.
async fn lookup(store: &dyn KvStore, key: &str) -> Option<String> {
    match store.get(key).await {
        Ok(value) => value,
        Err(err) => {
            warn!("Lookup of {} failed, treating as absent: {}", key, err);
            None
        }
    }
}

/// Writes the request's value, with expiry when `expiresIn` is set.
async fn write(store: &dyn KvStore, req: &WriteKeyRequest) -> Result<()> {
    match req.ttl() {
        Some(ttl) => store.setex(&req.key, ttl, &req.value).await?,
        None => store.set(&req.key, &req.value).await?,
    }
    Ok(())
}

/// Handler for GET /api/v1/:key
pub async fn get_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetValueResponse>> {
    match lookup(state.store.as_ref(), &key).await {
        Some(value) => Ok(Json(GetValueResponse::new(value))),
        None => Err(ApiError::NotFound(key)),
    }
}

/// Handler for POST /api/v1/add-key
///
/// Overwrites without checking whether the key exists.
pub async fn add_key(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<WriteKeyRequest>,
) -> Result<Json<WriteResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    write(state.store.as_ref(), &req).await?;
    info!("Added key {} (ttl: {:?})", req.key, req.ttl());

    Ok(Json(WriteResponse::ok(req)))
}

/// Handler for PUT|PATCH /api/v1/update
///
/// Only existing keys are written.
pub async fn update_key(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<WriteKeyRequest>,
) -> Result<Json<WriteResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    if lookup(state.store.as_ref(), &req.key).await.is_none() {
        return Err(ApiError::NotFound(req.key));
    }

    write(state.store.as_ref(), &req).await?;
    info!("Updated key {} (ttl: {:?})", req.key, req.ttl());

    Ok(Json(WriteResponse::ok(req)))
}

/// Handler for DELETE /api/v1/delete
pub async fn delete_key(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeleteKeyRequest>,
) -> Result<Json<DeleteResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    if lookup(state.store.as_ref(), &req.key).await.is_none() {
        return Err(ApiError::NotFound(req.key));
    }

    state.store.delete(&req.key).await?;
    info!("Deleted key {}", req.key);

    Ok(Json(DeleteResponse::new(req.key)))
}

/// Handler for GET /
pub async fn meta_handler() -> Json<MetaResponse> {
    Json(MetaResponse::current())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
