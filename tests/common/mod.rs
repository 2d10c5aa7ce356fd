#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use alias_shortener::application::services::AliasPolicy;
use alias_shortener::config::Credential;
use alias_shortener::domain::error::StoreError;
use alias_shortener::domain::generator::AliasGenerator;
use alias_shortener::domain::repositories::{StoreProbe, UrlGetter, UrlRepository, UrlSaver};
use alias_shortener::infrastructure::persistence::InMemoryUrlRepository;
use alias_shortener::routes::router;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias_generator::RandomAliasGenerator;

pub const USER: &str = "admin";
pub const PASSWORD: &str = "secret";

/// `Authorization` header value for the given credentials.
pub fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

pub fn admin_auth() -> String {
    basic_auth(USER, PASSWORD)
}

pub fn create_test_state(store: Arc<dyn UrlRepository>) -> AppState {
    create_test_state_with_generator(store, Arc::new(RandomAliasGenerator::new()))
}

pub fn create_test_state_with_generator(
    store: Arc<dyn UrlRepository>,
    generator: Arc<dyn AliasGenerator>,
) -> AppState {
    AppState::new(
        store,
        generator,
        AliasPolicy::default(),
        vec![
            Credential::new(USER, PASSWORD),
            Credential::new("jt", "longPassword"),
        ],
    )
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state, Duration::from_secs(4))).unwrap()
}

/// Server over a fresh in-memory store; the store is returned for seeding.
pub fn memory_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let store = Arc::new(InMemoryUrlRepository::new());
    let server = create_test_server(create_test_state(store.clone()));
    (server, store)
}

/// Store whose every operation fails as if the database were down.
pub struct FailingStore;

#[async_trait]
impl UrlSaver for FailingStore {
    async fn save(&self, _target_url: &str, _alias: &str) -> Result<i64, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl UrlGetter for FailingStore {
    async fn lookup(&self, _alias: &str) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl StoreProbe for FailingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Generator that hands out a fixed list of candidates, then repeats the last.
pub struct ScriptedGenerator {
    candidates: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(candidates: &[&str]) -> Self {
        let mut candidates: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
        candidates.reverse();
        Self {
            candidates: Mutex::new(candidates),
        }
    }
}

impl AliasGenerator for ScriptedGenerator {
    fn generate(&self, _length: usize) -> String {
        let mut candidates = self.candidates.lock().unwrap();
        if candidates.len() > 1 {
            candidates.pop().unwrap()
        } else {
            candidates.first().cloned().unwrap_or_default()
        }
    }
}
