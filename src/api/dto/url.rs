//! DTOs for the alias creation endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::alias_generator::{is_reserved, validate_alias};

/// Body of `POST /api/v1/url`.
///
/// `url` defaults to an empty string when absent so that a missing field is
/// reported as a validation error rather than a decode error.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveUrlRequest {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    #[validate(url(code = "url"))]
    pub url: String,

    /// Optional requested alias; empty means "generate one".
    #[validate(custom(function = "validate_alias_field"))]
    pub alias: Option<String>,
}

impl SaveUrlRequest {
    /// The requested alias, with an empty string treated as absent.
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct SaveUrlResponse {
    pub alias: String,
}

fn validate_alias_field(alias: &str) -> Result<(), ValidationError> {
    if alias.is_empty() {
        return Ok(());
    }

    validate_alias(alias).map_err(|_| ValidationError::new("alias"))?;

    if is_reserved(alias) {
        return Err(ValidationError::new("reserved"));
    }

    Ok(())
}
