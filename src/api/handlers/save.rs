//! Handler for the alias creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use validator::Validate;

use crate::api::dto::url::{SaveUrlRequest, SaveUrlResponse};
use crate::api::middleware::tracing::request_id;
use crate::application::error::ServiceError;
use crate::error::{ApiResponse, AppError};
use crate::state::AppState;

const OP: &str = "handlers.url.save";

/// Maps a URL to a requested or generated alias.
///
/// # Endpoint
///
/// `POST /api/v1/url` (HTTP Basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "golang" }
/// ```
///
/// `alias` is optional; when absent or empty one is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "golang" }
/// ```
///
/// # Errors
///
/// - 400 `Failed to decode request body` for malformed JSON
/// - 400 with per-field messages when validation fails
/// - 409 `URL already exists` when the alias is taken
/// - 500 `Failed to add URL` when the store fails
pub async fn save_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SaveUrlRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SaveUrlResponse>>, AppError> {
    let request_id = request_id(&headers);

    let Json(payload) = payload.map_err(|e| {
        tracing::error!(op = OP, request_id = %request_id, error = %e, "failed to decode request body");
        AppError::bad_request("Failed to decode request body")
    })?;

    tracing::info!(op = OP, request_id = %request_id, "request body decoded");

    if let Err(errors) = payload.validate() {
        tracing::error!(op = OP, request_id = %request_id, error = %errors, "invalid request");
        return Err(errors.into());
    }

    let created = state
        .alias_service
        .create_short_link(&payload.url, payload.requested_alias())
        .await
        .map_err(|e| {
            match &e {
                ServiceError::AliasAlreadyExists(alias) => {
                    tracing::info!(op = OP, request_id = %request_id, alias = %alias, "url already exists");
                }
                other => {
                    tracing::error!(op = OP, request_id = %request_id, error = %other, "failed to add url");
                }
            }
            match e {
                ServiceError::StorageUnavailable(_) => AppError::internal("Failed to add URL"),
                other => AppError::from(other),
            }
        })?;

    tracing::info!(
        op = OP,
        request_id = %request_id,
        alias = %created.alias,
        id = created.id,
        attempts = created.attempts,
        "url added"
    );

    Ok(Json(ApiResponse::ok(SaveUrlResponse {
        alias: created.alias,
    })))
}
