//! Tracing subscriber setup.
//!
//! | `ENV`   | format | default level |
//! |---------|--------|---------------|
//! | `local` | pretty | `debug`       |
//! | `dev`   | JSON   | `debug`       |
//! | `prod`  | JSON   | `info`        |
//!
//! `RUST_LOG`, when set, replaces the default level filter.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppEnv;

/// Default filter directive for `env`.
pub fn default_directive(env: AppEnv) -> &'static str {
    match env {
        AppEnv::Local | AppEnv::Dev => "debug",
        AppEnv::Prod => "info",
    }
}

/// Installs the global subscriber. Call once, from the binary.
///
/// # Errors
///
/// Returns an error if `filter` is not a valid `EnvFilter` directive or a
/// global subscriber is already installed.
pub fn init(env: AppEnv, filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid RUST_LOG filter '{}'", directives))?,
        None => EnvFilter::new(default_directive(env)),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match env {
        AppEnv::Local => builder.pretty().try_init(),
        AppEnv::Dev | AppEnv::Prod => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
    .context("Failed to install tracing subscriber")?;

    tracing::debug!(env = %env, "logger initialized");

    Ok(())
}
