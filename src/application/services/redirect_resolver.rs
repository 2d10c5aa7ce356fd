//! Alias resolution for the public redirect endpoint.

use std::sync::Arc;

use crate::application::error::ServiceError;
use crate::domain::repositories::UrlGetter;

/// Read-only lookup wrapper over the URL store.
///
/// Every call goes to the store; there is no cache in front of it.
pub struct RedirectResolver<G: UrlGetter + ?Sized> {
    getter: Arc<G>,
}

impl<G: UrlGetter + ?Sized> RedirectResolver<G> {
    /// Creates a new resolver.
    pub fn new(getter: Arc<G>) -> Self {
        Self { getter }
    }

    /// Returns the target URL mapped to `alias`.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidInput`] if `alias` is empty; the store is not
    ///   queried
    /// - [`ServiceError::NotFound`] if nothing is mapped under `alias`
    /// - [`ServiceError::StorageUnavailable`] if the store fails
    pub async fn resolve(&self, alias: &str) -> Result<String, ServiceError> {
        if alias.is_empty() {
            return Err(ServiceError::InvalidInput(
                "alias must not be empty".to_string(),
            ));
        }

        Ok(self.getter.lookup(alias).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StoreError;
    use crate::domain::repositories::MockUrlGetter;

    #[tokio::test]
    async fn test_resolve_existing_alias() {
        let mut getter = MockUrlGetter::new();
        getter
            .expect_lookup()
            .withf(|alias| alias == "golang")
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let url = RedirectResolver::new(Arc::new(getter))
            .resolve("golang")
            .await
            .unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_missing_alias() {
        let mut getter = MockUrlGetter::new();
        getter
            .expect_lookup()
            .times(1)
            .returning(|alias| Err(StoreError::NotFound(alias.to_string())));

        let err = RedirectResolver::new(Arc::new(getter))
            .resolve("missing")
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::NotFound("missing".to_string()));
    }

    #[tokio::test]
    async fn test_resolve_storage_failure() {
        let mut getter = MockUrlGetter::new();
        getter
            .expect_lookup()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("db down".to_string())));

        let err = RedirectResolver::new(Arc::new(getter))
            .resolve("golang")
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::StorageUnavailable("db down".to_string()));
    }

    #[tokio::test]
    async fn test_resolve_empty_alias_skips_store() {
        let mut getter = MockUrlGetter::new();
        getter.expect_lookup().times(0);

        let err = RedirectResolver::new(Arc::new(getter))
            .resolve("")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
}
