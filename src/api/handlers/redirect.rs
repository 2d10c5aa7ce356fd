//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::middleware::tracing::request_id;
use crate::application::error::ServiceError;
use crate::error::AppError;
use crate::state::AppState;

const OP: &str = "handlers.redirect";

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// The `Location` header carries the stored URL byte-for-byte.
///
/// # Errors
///
/// - 400 `Invalid request` when the alias segment is empty (also served for `GET /`)
/// - 404 `URL not found` for an unknown alias
/// - 500 `Internal error` when the store fails
pub async fn redirect_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    alias: Option<Path<String>>,
) -> Result<Response, AppError> {
    let request_id = request_id(&headers);

    let alias = match alias {
        Some(Path(alias)) if !alias.is_empty() => alias,
        _ => {
            tracing::info!(op = OP, request_id = %request_id, "alias is empty");
            return Err(AppError::bad_request("Invalid request"));
        }
    };

    let target = state
        .redirect_resolver
        .resolve(&alias)
        .await
        .map_err(|e| {
            match &e {
                ServiceError::NotFound(_) => {
                    tracing::info!(op = OP, request_id = %request_id, alias = %alias, "url not found");
                }
                other => {
                    tracing::error!(op = OP, request_id = %request_id, alias = %alias, error = %other, "failed to get url");
                }
            }
            AppError::from(e)
        })?;

    let location = HeaderValue::from_bytes(target.as_bytes()).map_err(|e| {
        tracing::error!(op = OP, request_id = %request_id, alias = %alias, error = %e, "stored url is not a valid header value");
        AppError::internal("Internal error")
    })?;

    tracing::info!(op = OP, request_id = %request_id, alias = %alias, url = %target, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
