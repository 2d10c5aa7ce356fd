//! Core domain entities.
//!
//! - [`UrlMapping`] - a persisted alias to target URL pair

pub mod url_mapping;

pub use url_mapping::UrlMapping;
