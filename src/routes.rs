//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`     - Alias redirect (public)
//! - `GET  /`            - Empty alias, answered with 400 (public)
//! - `GET  /health`      - Storage health check (public)
//! - `/api/*`            - Write API (HTTP Basic auth required)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - 408 after the configured request timeout
//! - **Panic recovery** - a panicking handler answers 500 instead of dropping
//!   the connection
//! - **Authentication** - HTTP Basic on `/api/*` only
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, panic, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with every route and middleware except path
/// normalization.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/", get(redirect_handler))
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(panic::layer())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::layer())
        .layer(tracing::propagate_request_id())
        .layer(tracing::set_request_id())
}

/// Constructs the application service: [`router`] wrapped so that
/// `/golang/` and `/golang` resolve the same alias.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
