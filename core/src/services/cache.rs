//! Cache store abstraction consumed by the domain services.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Expiring string key/value store
///
/// The contract is deliberately small: string keys, string values, a TTL per
/// entry. `set_string` is an idempotent overwrite; no multi-key atomicity is
/// assumed, so callers writing related entries must treat a partial failure
/// as a failure of the whole operation.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Store a value under a key with the given time-to-live
    ///
    /// A failed write surfaces as `DomainError::CacheWriteFailure`.
    async fn set_string(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError>;

    /// Fetch the value stored under a key, if present and not expired
    async fn get_string(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Remove a key; returns whether an entry existed
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;
}
