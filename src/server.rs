//! HTTP server initialization and runtime setup.
//!
//! Selects the storage backend, builds the router and runs Axum until a
//! shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::KeyValueStore;
use crate::infrastructure::store::{InMemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects the configured key-value backend.
///
/// Redis is used when configured; otherwise an in-memory store.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable. The store holds
/// the only copy of every mapping, so there is no silent fallback.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match &config.redis_url {
        Some(redis_url) => {
            let store = RedisStore::connect(redis_url, config.redis_key_prefix.clone())
                .await
                .context("Failed to connect to Redis store")?;
            tracing::info!("Store enabled (Redis)");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("REDIS_URL not set, mappings are kept in memory only");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The Redis store cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let state = AppState::new(store, config.base_url());

    let app = app_router(state, Duration::from_secs(config.request_timeout_secs));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
