//! Storage capability traits.
//!
//! The URL store is split by capability so each service depends only on the
//! operations it actually performs:
//!
//! - [`UrlSaver`] - insert a new mapping (create path)
//! - [`UrlGetter`] - look up a mapping by alias (redirect path)
//! - [`StoreProbe`] - liveness check (health endpoint, admin CLI)
//!
//! [`UrlRepository`] bundles all three and is what the process wiring holds.
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated with `mockall` under `cfg(test)`.

pub mod url_repository;

pub use url_repository::{StoreProbe, UrlGetter, UrlRepository, UrlSaver};

#[cfg(test)]
pub use url_repository::{MockStoreProbe, MockUrlGetter, MockUrlSaver};
