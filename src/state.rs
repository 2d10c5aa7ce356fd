//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AliasPolicy, AliasService, RedirectResolver};
use crate::config::Credential;
use crate::domain::generator::AliasGenerator;
use crate::domain::repositories::UrlRepository;

pub type SharedAliasService = AliasService<dyn UrlRepository, dyn AliasGenerator>;
pub type SharedRedirectResolver = RedirectResolver<dyn UrlRepository>;

/// Handles shared by every request. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<SharedAliasService>,
    pub redirect_resolver: Arc<SharedRedirectResolver>,
    /// Used directly only by the health check.
    pub store: Arc<dyn UrlRepository>,
    pub credentials: Arc<Vec<Credential>>,
}

impl AppState {
    /// Wires both services to the same store.
    pub fn new(
        store: Arc<dyn UrlRepository>,
        generator: Arc<dyn AliasGenerator>,
        policy: AliasPolicy,
        credentials: Vec<Credential>,
    ) -> Self {
        Self {
            alias_service: Arc::new(AliasService::new(store.clone(), generator, policy)),
            redirect_resolver: Arc::new(RedirectResolver::new(store.clone())),
            store,
            credentials: Arc::new(credentials),
        }
    }
}
