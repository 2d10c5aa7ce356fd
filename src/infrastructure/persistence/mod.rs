//! URL store implementations.
//!
//! - [`PgUrlRepository`] - PostgreSQL via SQLx, used in production
//! - [`InMemoryUrlRepository`] - process-local store for tests and demos

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
