//! Domain layer: entities, storage contracts and the alias generator contract.
//!
//! Nothing in here depends on HTTP, SQL or a concrete random source.
//!
//! - [`entities`] - persisted data structures
//! - [`repositories`] - capability traits implemented by the infrastructure layer
//! - [`generator`] - alias candidate generation
//! - [`error`] - store error taxonomy

pub mod entities;
pub mod error;
pub mod generator;
pub mod repositories;

pub use error::StoreError;
pub use generator::AliasGenerator;
