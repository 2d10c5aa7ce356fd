//! Capability traits over the alias to URL mapping set.

use async_trait::async_trait;

use crate::domain::error::StoreError;

/// Write capability of the URL store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`]
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Inserts a new mapping and returns its store-assigned id.
    ///
    /// The record is durable once `Ok` is returned. Uniqueness of `alias` is
    /// decided atomically by the insert; callers must not pre-check.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DuplicateAlias`] if `alias` is already mapped
    /// - [`StoreError::Unavailable`] on any backend failure
    async fn save(&self, target_url: &str, alias: &str) -> Result<i64, StoreError>;
}

/// Read capability of the URL store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the target URL stored for `alias`, unchanged.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if nothing is mapped under `alias`
    /// - [`StoreError::Unavailable`] on any backend failure
    async fn lookup(&self, alias: &str) -> Result<String, StoreError>;
}

/// Liveness probe for the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Performs the cheapest round trip the backend supports.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Full URL store: every capability the process wiring needs.
pub trait UrlRepository: UrlSaver + UrlGetter + StoreProbe {}

impl<T> UrlRepository for T where T: UrlSaver + UrlGetter + StoreProbe {}
