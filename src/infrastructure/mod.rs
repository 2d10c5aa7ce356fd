//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the storage traits declared in
//! [`crate::domain::repositories`].
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory URL stores

pub mod persistence;
