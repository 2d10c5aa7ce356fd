//! Classification of `sqlx` errors into [`StoreError`] variants.

use crate::domain::error::StoreError;

/// Name of the unique constraint on `url_mappings.alias`.
pub const ALIAS_UNIQUE_CONSTRAINT: &str = "url_mappings_alias_key";

/// Returns true if `e` is a unique violation of the alias constraint.
pub fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ALIAS_UNIQUE_CONSTRAINT))
}

/// Maps any other database failure to [`StoreError::Unavailable`], keeping the
/// driver message for the logs.
pub fn unavailable(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}
