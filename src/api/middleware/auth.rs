//! HTTP Basic authentication middleware for the write routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::config::Credential;
use crate::{error::AppError, state::AppState};

/// Authenticates requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(<user>:<password>)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic realm="url-shortener"`
/// if the header is missing, malformed, or does not match a configured
/// credential. The handler is never reached in that case.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/url", post(save_url_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::debug!("missing or malformed Authorization header");
            AppError::unauthorized("Unauthorized")
        })?;

    if !is_authorized(&st.credentials, &user, password.as_deref().unwrap_or_default()) {
        tracing::warn!(user = %user, "rejected credentials");
        return Err(AppError::unauthorized("Unauthorized"));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}

/// Returns `true` if `user`/`password` matches one of `credentials`.
///
/// Every entry is compared so the answer does not depend on where in the
/// list a match sits.
pub fn is_authorized(credentials: &[Credential], user: &str, password: &str) -> bool {
    credentials.iter().fold(false, |found, c| {
        let user_ok = constant_time_eq(c.user.as_bytes(), user.as_bytes());
        let password_ok = constant_time_eq(c.password.as_bytes(), password.as_bytes());
        found | (user_ok & password_ok)
    })
}

/// Byte equality whose running time does not depend on where `a` and `b` differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
