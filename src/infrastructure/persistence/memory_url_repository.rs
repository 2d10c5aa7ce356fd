//! In-memory implementation of the URL store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::UrlMapping;
use crate::domain::error::StoreError;
use crate::domain::repositories::{StoreProbe, UrlGetter, UrlSaver};

/// URL store kept in a sharded concurrent map.
///
/// Inserts go through the map's entry API, which holds the shard lock for the
/// duration of the check-and-insert, so concurrent saves of the same alias
/// produce exactly one winner. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    mappings: DashMap<String, UrlMapping>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Returns a copy of the full mapping for `alias`.
    pub fn get(&self, alias: &str) -> Option<UrlMapping> {
        self.mappings.get(alias).map(|m| m.value().clone())
    }
}

#[async_trait]
impl UrlSaver for InMemoryUrlRepository {
    async fn save(&self, target_url: &str, alias: &str) -> Result<i64, StoreError> {
        match self.mappings.entry(alias.to_string()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateAlias(alias.to_string())),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                slot.insert(UrlMapping::new(
                    id,
                    alias.to_string(),
                    target_url.to_string(),
                    Utc::now(),
                ));
                Ok(id)
            }
        }
    }
}

#[async_trait]
impl UrlGetter for InMemoryUrlRepository {
    async fn lookup(&self, alias: &str) -> Result<String, StoreError> {
        self.mappings
            .get(alias)
            .map(|m| m.target_url.clone())
            .ok_or_else(|| StoreError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl StoreProbe for InMemoryUrlRepository {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
