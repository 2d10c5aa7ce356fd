//! API route configuration.
//!
//! All API endpoints require HTTP Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::save_url_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Write routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `POST /v1/url` - Create an alias for a URL
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/v1/url", post(save_url_handler))
}
