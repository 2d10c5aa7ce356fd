//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::UrlMapping;
use crate::domain::error::StoreError;
use crate::domain::repositories::{StoreProbe, UrlGetter, UrlSaver};
use crate::utils::db_error::{is_unique_violation_on_alias, unavailable};

/// Row shape of `url_mappings`, decoded by column name.
#[derive(sqlx::FromRow)]
struct UrlMappingRow {
    id: i64,
    alias: String,
    target_url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlMappingRow> for UrlMapping {
    fn from(row: UrlMappingRow) -> Self {
        UrlMapping::new(row.id, row.alias, row.target_url, row.created_at)
    }
}

/// PostgreSQL repository for alias mappings.
///
/// Uniqueness is enforced by the `url_mappings_alias_key` constraint, so two
/// concurrent saves of the same alias resolve inside the database.
#[derive(Clone)]
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a connection pool against `database_url`.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .connect(database_url)
            .await
            .map_err(unavailable)?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Applies the embedded schema migrations.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    /// Counts stored mappings.
    pub async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(unavailable)
    }

    /// Fetches the full row for `alias`, if any.
    pub async fn find_mapping(&self, alias: &str) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT id, alias, target_url, created_at
            FROM url_mappings
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(unavailable)?;

        Ok(row.map(UrlMapping::from))
    }

    /// Returns the server version string.
    pub async fn server_version(&self) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT version()")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(unavailable)
    }
}

#[async_trait]
impl UrlSaver for PgUrlRepository {
    async fn save(&self, target_url: &str, alias: &str) -> Result<i64, StoreError> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO url_mappings (alias, target_url)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(alias)
        .bind(target_url)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(id) => Ok(id),
            Err(e) if is_unique_violation_on_alias(&e) => {
                Err(StoreError::DuplicateAlias(alias.to_string()))
            }
            Err(e) => Err(unavailable(e)),
        }
    }
}

#[async_trait]
impl UrlGetter for PgUrlRepository {
    async fn lookup(&self, alias: &str) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT target_url
            FROM url_mappings
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(unavailable)?
        .ok_or_else(|| StoreError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl StoreProbe for PgUrlRepository {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(unavailable)?;

        Ok(())
    }
}
