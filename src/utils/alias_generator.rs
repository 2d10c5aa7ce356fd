//! Alias generation and validation.
//!
//! Generated aliases are drawn from a fixed 62-character alphanumeric
//! alphabet. Requested aliases are accepted as-is provided they satisfy the
//! alias invariant checked by [`validate_alias`].

use rand::Rng;
use thiserror::Error;

use crate::domain::generator::AliasGenerator;

/// Characters a generated alias may contain.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Maximum alias length, in characters.
pub const MAX_ALIAS_LENGTH: usize = 32;

/// Aliases that would be shadowed by fixed routes.
pub const RESERVED_ALIASES: &[&str] = &["api", "health"];

/// Characters that cannot appear in a single URL path segment.
const FORBIDDEN_CHARS: &[char] = &['/', '?', '#', '%'];

/// Reasons an alias violates the alias invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("alias must not be empty")]
    Empty,

    #[error("alias must be at most {MAX_ALIAS_LENGTH} characters, got {0}")]
    TooLong(usize),

    #[error("alias contains a forbidden character: {0:?}")]
    ForbiddenChar(char),
}

/// Random alias generator backed by the thread-local PRNG.
///
/// Not cryptographically secure; collisions are possible and are resolved by
/// the store's uniqueness constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl RandomAliasGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();

        (0..length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect()
    }
}

/// Checks the alias invariant: 1-32 printable characters that fit in one
/// URL path segment.
///
/// # Errors
///
/// Returns the first rule the alias breaks.
pub fn validate_alias(alias: &str) -> Result<(), AliasError> {
    if alias.is_empty() {
        return Err(AliasError::Empty);
    }

    let length = alias.chars().count();
    if length > MAX_ALIAS_LENGTH {
        return Err(AliasError::TooLong(length));
    }

    if let Some(c) = alias
        .chars()
        .find(|c| c.is_control() || c.is_whitespace() || FORBIDDEN_CHARS.contains(c))
    {
        return Err(AliasError::ForbiddenChar(c));
    }

    Ok(())
}

/// Returns true if `alias` collides with a fixed route.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(alias))
}
