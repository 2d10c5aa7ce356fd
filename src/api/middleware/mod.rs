//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, panic recovery and observability middleware.

pub mod auth;
pub mod panic;
pub mod tracing;
