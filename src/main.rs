//! KV Gateway - An HTTP facade over a key-value store
//!
//! Serves get/add/update/delete over Redis, or over an in-process store
//! when `STORE_BACKEND=memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kv_gateway::api::create_router;
use kv_gateway::config::{Config, StoreBackend};
use kv_gateway::store::{MemoryStore, RedisStore};
use kv_gateway::{spawn_cleanup_task, AppState};

/// Main entry point for the gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the configured store backend
/// 4. Create Axum router with all endpoints
/// 5. Serve until SIGINT/SIGTERM, then shut down gracefully
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kv_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting KV Gateway");

    let config = Config::from_env();
    info!(
        "Configuration loaded: host={}, port={}, backend={:?}",
        config.server_host, config.server_port, config.store_backend
    );

    let (state, cleanup_handle) = build_state(&config).await?;

    let app = create_router(state);

    let addr = SocketAddr::new(config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Connects the configured backend and wraps it in application state.
///
/// The memory backend also gets its cleanup task, returned for shutdown.
async fn build_state(config: &Config) -> anyhow::Result<(AppState, Option<JoinHandle<()>>)> {
    match config.store_backend {
        StoreBackend::Redis => {
            let store = RedisStore::connect(&config.redis_url)
                .await
                .with_context(|| format!("failed to connect to {}", config.redis_url))?;
            Ok((AppState::new(Arc::new(store)), None))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on restart");
            let store = Arc::new(MemoryStore::new());
            let handle = spawn_cleanup_task(store.clone(), config.cleanup_interval);
            Ok((AppState::new(store), Some(handle)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task if one is running.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
