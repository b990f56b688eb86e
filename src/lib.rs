//! KV Gateway - An HTTP facade over a key-value store
//!
//! Maps four REST endpoints onto `get`, `set`, `setex` and `delete` against
//! Redis or an in-process store. Also ships a small console guessing game.

pub mod api;
pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
