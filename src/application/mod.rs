//! Application layer services implementing the alias lifecycle.
//!
//! Services are stateless orchestrators over the storage capability traits and
//! the alias generator, all injected at construction.
//!
//! # Available Services
//!
//! - [`services::AliasService`] - create path, collision retry policy
//! - [`services::RedirectResolver`] - read path

pub mod error;
pub mod services;

pub use error::ServiceError;
