//! Errors reported by URL store implementations.

use thiserror::Error;

/// Failure modes of a [`crate::domain::repositories::UrlRepository`].
///
/// Every implementation must collapse its backend-specific errors into one of
/// these variants so the service layer can stay engine-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The alias is already mapped. Raised atomically by the insert itself.
    #[error("alias already exists: {0}")]
    DuplicateAlias(String),

    /// No mapping exists for the alias.
    #[error("no mapping for alias: {0}")]
    NotFound(String),

    /// The backend could not be reached or the statement failed.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
