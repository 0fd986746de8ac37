//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository seeded with one user
    pub fn with_existing_user(user: User) -> Self {
        let repo = Self::new();
        repo.users
            .try_write()
            .expect("fresh lock is uncontended")
            .insert(user.id, user);
        repo
    }

    /// Create a mock repository reading from a shared store
    ///
    /// Used by the mock unit of work so committed records become visible
    /// through the repository it hands out.
    pub fn with_store(store: Arc<RwLock<HashMap<Uuid, User>>>) -> Self {
        Self { users: store }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        // Case-sensitive, exact-string match like the real store
        Ok(users
            .values()
            .find(|u| u.username == username && !u.is_deleted)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        User::new(username.to_string(), "hash".to_string(), "User".to_string())
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let repo = MockUserRepository::with_existing_user(user("Alice"));

        assert!(repo.find_by_username("Alice").await.unwrap().is_some());
        assert!(repo.find_by_username("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_soft_deleted_users_are_invisible() {
        let mut deleted = user("bob");
        deleted.is_deleted = true;
        let repo = MockUserRepository::with_existing_user(deleted);

        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }
}
