//! Background Tasks Module
//!
//! # Tasks
//! - TTL Cleanup: sweeps expired memory-store entries at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
