//! User repository trait defining the interface for credential lookup.
//!
//! The trait is async-first and uses Result types for proper error handling.
//! Implementations handle the actual database operations while maintaining
//! the abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity lookup
///
/// The sign-in core treats users as read-only; the only operation it needs
/// from the credential store is lookup by username.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their exact username
    ///
    /// Matching is exact-string and case-sensitive on the stored username;
    /// no normalization is performed. Soft-deleted records are excluded.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given username
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
