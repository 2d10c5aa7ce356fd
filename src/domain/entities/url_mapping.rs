//! Persisted alias to URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between an alias and its target URL.
///
/// Mappings are insert-only: none of the fields change after the row is
/// written, and the alias is unique across the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new mapping value.
    pub fn new(id: i64, alias: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            alias,
            target_url,
            created_at,
        }
    }
}
