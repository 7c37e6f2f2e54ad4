//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/p`, `/s/{code}`, `/l` - Link endpoints (see [`crate::api::routes`])
//! - `GET /health`           - Store health check
//! - anything else           - 404
//!
//! # Middleware (outermost first)
//!
//! - **Path normalization** - Trailing slash handling, so `/s/` is `/s`
//! - **Panic recovery** - Panics become logged 500 responses
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{boundary, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline after which an in-flight request is dropped
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state, request_timeout))
}

/// Routes and middleware without path normalization.
///
/// Separate from [`app_router`] so tests can mount it directly.
pub fn app_routes(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(api::routes::link_routes())
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(boundary::timeout_layer(request_timeout))
        .layer(tracing::layer())
        .layer(boundary::catch_panic_layer())
}
