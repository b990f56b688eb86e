//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_key, delete_key, get_value, health_handler, meta_handler, update_key, AppState,
};
use crate::error::ApiError;

/// Prefix under which the key-value endpoints are mounted.
pub const API_PREFIX: &str = "/api/v1";

/// Reads the key spelled like a static route segment.
///
/// Static segments win over `/:key`, so `GET /update` would otherwise never
/// reach a stored key named `update`.
fn read_literal(key: &'static str) -> MethodRouter<AppState> {
    get(move |state: State<AppState>| get_value(state, Path(key.to_string())))
}

/// Key-value endpoints, relative to [`API_PREFIX`].
///
/// Each route answers unexpected methods with a `MethodMismatch` body
/// instead of axum's empty 405.
fn kv_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/add-key",
            read_literal("add-key")
                .post(add_key)
                .fallback(|| async { ApiError::MethodMismatch("POST") }),
        )
        .route(
            "/update",
            read_literal("update")
                .put(update_key)
                .patch(update_key)
                .fallback(|| async { ApiError::MethodMismatch("PUT or PATCH") }),
        )
        .route(
            "/delete",
            read_literal("delete")
                .delete(delete_key)
                .fallback(|| async { ApiError::MethodMismatch("DELETE") }),
        )
        .route(
            "/:key",
            get(get_value).fallback(|| async { ApiError::MethodMismatch("GET") }),
        )
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Process metadata
/// - `GET /health` - Health check
/// - `GET /api/v1/:key` - Read a value
/// - `POST /api/v1/add-key` - Write a value, optionally expiring
/// - `PUT|PATCH /api/v1/update` - Overwrite an existing value
/// - `DELETE /api/v1/delete` - Remove a key
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(meta_handler))
        .route("/health", get(health_handler))
        .nest(API_PREFIX, kv_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
