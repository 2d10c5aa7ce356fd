//! Alias candidate generation contract.

/// Produces alias candidates of a requested length.
///
/// Generation never fails; uniqueness is not guaranteed and is enforced by
/// the store when the candidate is saved.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a candidate of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}
