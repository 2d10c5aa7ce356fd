//! Business logic services for the application layer.

pub mod alias_service;
pub mod redirect_resolver;

pub use alias_service::{AliasPolicy, AliasService, CreatedAlias};
pub use redirect_resolver::RedirectResolver;
