//! Alias creation service.

use std::sync::Arc;

use crate::application::error::ServiceError;
use crate::domain::error::StoreError;
use crate::domain::generator::AliasGenerator;
use crate::domain::repositories::UrlSaver;
use crate::utils::alias_generator::{MAX_ALIAS_LENGTH, validate_alias};

/// Generated alias length when nothing else is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Generation attempts per request when nothing else is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Upper bound on [`AliasPolicy::max_attempts`].
pub const MAX_ATTEMPTS_LIMIT: u32 = 100;

/// Policy for system-generated aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    /// Length of each generated candidate.
    pub length: usize,
    /// Total number of candidates tried before giving up. Values below 1 are
    /// treated as 1, which means no retry at all.
    pub max_attempts: u32,
}

impl AliasPolicy {
    /// Builds a policy, checking `length` against the alias invariant
    /// (1-32) and `max_attempts` against 1-100.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidInput`] if either value is out of range.
    pub fn new(length: usize, max_attempts: u32) -> Result<Self, ServiceError> {
        if length == 0 || length > MAX_ALIAS_LENGTH {
            return Err(ServiceError::InvalidInput(format!(
                "alias length must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH, length
            )));
        }

        if max_attempts == 0 || max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ServiceError::InvalidInput(format!(
                "max attempts must be between 1 and {}, got {}",
                MAX_ATTEMPTS_LIMIT, max_attempts
            )));
        }

        Ok(Self {
            length,
            max_attempts,
        })
    }
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAlias {
    pub alias: String,
    /// Store-assigned id, for diagnostics only.
    pub id: i64,
    /// Number of save attempts it took (always 1 for requested aliases).
    pub attempts: u32,
}

/// Creates alias mappings.
///
/// Holds no state of its own: uniqueness is decided by the store on insert,
/// so the service never checks for existence before saving.
///
/// # Collision policy
///
/// - A requested alias is saved as-is; a collision is returned as
///   [`ServiceError::AliasAlreadyExists`] immediately.
/// - A generated alias that collides is regenerated, up to
///   [`AliasPolicy::max_attempts`] candidates in total. If every candidate
///   collides the last one is reported as [`ServiceError::AliasAlreadyExists`].
/// - Storage failures are returned on the first occurrence, never retried.
/// - Generated candidates are checked against the alias invariant before
///   saving, so a policy built by hand with a bad length fails with
///   [`ServiceError::InvalidInput`] instead of storing an unreachable alias.
pub struct AliasService<S: UrlSaver + ?Sized, G: AliasGenerator + ?Sized> {
    saver: Arc<S>,
    generator: Arc<G>,
    policy: AliasPolicy,
}

impl<S: UrlSaver + ?Sized, G: AliasGenerator + ?Sized> AliasService<S, G> {
    /// Creates a new alias service.
    pub fn new(saver: Arc<S>, generator: Arc<G>, policy: AliasPolicy) -> Self {
        Self {
            saver,
            generator,
            policy,
        }
    }

    pub fn policy(&self) -> AliasPolicy {
        self.policy
    }

    /// Maps `target_url` to `requested_alias`, or to a generated alias when
    /// none is requested.
    ///
    /// `target_url` is expected to have been validated by the caller; only
    /// emptiness is re-checked here. An empty `requested_alias` is the same as
    /// `None`.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidInput`] if `target_url` is empty or the
    ///   requested alias breaks the alias invariant
    /// - [`ServiceError::AliasAlreadyExists`] on collision (see the type docs)
    /// - [`ServiceError::StorageUnavailable`] if the store fails
    pub async fn create_short_link(
        &self,
        target_url: &str,
        requested_alias: Option<&str>,
    ) -> Result<CreatedAlias, ServiceError> {
        if target_url.is_empty() {
            return Err(ServiceError::InvalidInput(
                "target url must not be empty".to_string(),
            ));
        }

        match requested_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => self.save_requested(target_url, alias).await,
            None => self.save_generated(target_url).await,
        }
    }

    async fn save_requested(
        &self,
        target_url: &str,
        alias: &str,
    ) -> Result<CreatedAlias, ServiceError> {
        validate_alias(alias)?;

        let id = self.saver.save(target_url, alias).await?;

        Ok(CreatedAlias {
            alias: alias.to_string(),
            id,
            attempts: 1,
        })
    }

    async fn save_generated(&self, target_url: &str) -> Result<CreatedAlias, ServiceError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut last_candidate = String::new();

        for attempt in 1..=max_attempts {
            let candidate = self.generator.generate(self.policy.length);
            validate_alias(&candidate)?;

            match self.saver.save(target_url, &candidate).await {
                Ok(id) => {
                    return Ok(CreatedAlias {
                        alias: candidate,
                        id,
                        attempts: attempt,
                    });
                }
                Err(StoreError::DuplicateAlias(_)) => last_candidate = candidate,
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::AliasAlreadyExists(last_candidate))
    }
}
