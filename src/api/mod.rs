//! API Module
//!
//! HTTP handlers and routing for the key-value gateway.
//!
//! # Endpoints
//! - `GET /` - Process metadata
//! - `GET /health` - Health check endpoint
//! - `GET /api/v1/:key` - Retrieve a value by key
//! - `POST /api/v1/add-key` - Store a key-value pair
//! - `PUT|PATCH /api/v1/update` - Overwrite an existing key
//! - `DELETE /api/v1/delete` - Delete a key

pub mod extract;
pub mod handlers;
pub mod routes;


pub use handlers::*;
pub use routes::{create_router, API_PREFIX};
