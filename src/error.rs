//! HTTP-facing error type.
//!
//! Every failure leaving the gateway is rendered as
//!
//! ```json
//! { "status": "Error", "error": "<message>" }
//! ```
//!
//! Messages are generic; the detail behind them is logged by the handler
//! before conversion.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::application::error::ServiceError;

/// Realm advertised in `WWW-Authenticate` on 401 responses.
pub const AUTH_REALM: &str = "url-shortener";

pub const STATUS_OK: &str = "OK";
pub const STATUS_ERROR: &str = "Error";

/// Common response envelope: `status` plus either `error` or the payload
/// fields flattened next to it.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: STATUS_OK,
            error: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            error: Some(message.into()),
            data: None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let unauthorized = matches!(self, AppError::Unauthorized { .. });

        let body = ApiResponse::error(match self {
            AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        });

        let mut response = (status, Json(body)).into_response();

        if unauthorized {
            let challenge = format!("Basic realm=\"{}\"", AUTH_REALM);
            if let Ok(value) = HeaderValue::from_str(&challenge) {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, value);
            }
        }

        response
    }
}

/// Generic mapping used by the read path. The create handler overrides the
/// message for storage failures.
impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(_) => AppError::bad_request("Invalid request"),
            ServiceError::AliasAlreadyExists(_) => AppError::conflict("URL already exists"),
            ServiceError::NotFound(_) => AppError::not_found("URL not found"),
            ServiceError::StorageUnavailable(_) => AppError::internal("Internal error"),
        }
    }
}

/// Flattens field errors into `field <name> is ...` sentences, one per field,
/// sorted by field name and joined with `", "`.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let field = field.to_string();
                let code = errs.first().map(|e| e.code.to_string()).unwrap_or_default();
                (field, code)
            })
            .collect();
        fields.sort();

        let message = fields
            .iter()
            .map(|(field, code)| match code.as_str() {
                "required" => format!("field {} is a required field", field),
                "url" => format!("field {} is not a valid URL", field),
                "reserved" => format!("field {} is a reserved name", field),
                _ => format!("field {} is not valid", field),
            })
            .collect::<Vec<_>>()
            .join(", ");

        AppError::bad_request(message)
    }
}
