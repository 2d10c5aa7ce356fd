//! Errors returned by the application services.

use thiserror::Error;

use crate::domain::error::StoreError;
use crate::utils::alias_generator::AliasError;

/// Error taxonomy of the create and redirect paths.
///
/// Services return these values and nothing else: they never log, never pick
/// an HTTP status and never terminate the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Missing or malformed input that slipped past the gateway.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The alias is taken. For requested aliases this is immediate; for
    /// generated ones it means every attempt collided.
    #[error("alias already exists: {0}")]
    AliasAlreadyExists(String),

    /// No mapping exists for the alias.
    #[error("alias not found: {0}")]
    NotFound(String),

    /// The store failed; never retried by the services.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateAlias(alias) => Self::AliasAlreadyExists(alias),
            StoreError::NotFound(alias) => Self::NotFound(alias),
            StoreError::Unavailable(reason) => Self::StorageUnavailable(reason),
        }
    }
}

impl From<AliasError> for ServiceError {
    fn from(e: AliasError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
