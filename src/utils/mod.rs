//! Helpers shared across layers.
//!
//! - [`alias_generator`] - random alias generation and alias validation
//! - [`db_error`] - classification of `sqlx` errors

pub mod alias_generator;
pub mod db_error;
