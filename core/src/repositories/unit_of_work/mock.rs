//! In-memory implementation of UnitOfWork for testing
//!
//! Unlike the eager SQL implementation, this mock buffers writes so the
//! full flush/commit/rollback lifecycle can be observed: records staged
//! inside a transaction are applied on commit and discarded on rollback,
//! records staged outside a transaction are applied by `save_changes`.

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainResult, TransactionError};
use crate::repositories::user::{MockUserRepository, UserRepository};

use super::trait_::UnitOfWork;

/// Mock unit of work for testing
pub struct MockUnitOfWork {
    /// Committed records, shared with the repository instance
    store: Arc<RwLock<HashMap<Uuid, User>>>,
    users: OnceCell<MockUserRepository>,
    /// Writes staged outside any transaction, flushed by `save_changes`
    pending: Vec<User>,
    /// Writes staged inside the active transaction
    tx_pending: Vec<User>,
    in_transaction: bool,
    disposed: bool,
    release_count: u32,
    fail_next_commit: bool,
}

impl MockUnitOfWork {
    /// Create an empty mock unit of work
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            users: OnceCell::new(),
            pending: Vec::new(),
            tx_pending: Vec::new(),
            in_transaction: false,
            disposed: false,
            release_count: 0,
            fail_next_commit: false,
        }
    }

    /// Create a mock unit of work whose store already holds one user
    pub fn with_existing_user(user: User) -> Self {
        let mut committed = HashMap::new();
        committed.insert(user.id, user);
        Self {
            store: Arc::new(RwLock::new(committed)),
            ..Self::new()
        }
    }

    /// Stage a write; it lands in the transaction buffer while a
    /// transaction is open, otherwise in the pending buffer
    pub fn stage_user(&mut self, user: User) {
        if self.in_transaction {
            self.tx_pending.push(user);
        } else {
            self.pending.push(user);
        }
    }

    /// Make the next commit fail after releasing the transactional context
    pub fn fail_next_commit(&mut self) {
        self.fail_next_commit = true;
    }

    /// How many times underlying resources have been released
    pub fn release_count(&self) -> u32 {
        self.release_count
    }

    async fn apply(&self, staged: Vec<User>) -> u64 {
        let count = staged.len() as u64;
        let mut store = self.store.write().await;
        for user in staged {
            store.insert(user.id, user);
        }
        count
    }
}

impl Default for MockUnitOfWork {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UnitOfWork for MockUnitOfWork {
    fn users(&self) -> &dyn UserRepository {
        self.users
            .get_or_init(|| MockUserRepository::with_store(self.store.clone()))
    }

    async fn begin_transaction(&mut self) -> DomainResult<()> {
        if self.disposed {
            return Err(TransactionError::Disposed.into());
        }
        if self.in_transaction {
            return Err(TransactionError::AlreadyActive.into());
        }
        self.in_transaction = true;
        Ok(())
    }

    async fn commit_transaction(&mut self) -> DomainResult<()> {
        // Release the transactional context first so state is Idle on
        // every exit path, including an injected commit failure.
        self.in_transaction = false;
        let staged: Vec<User> = self.pending.drain(..).chain(self.tx_pending.drain(..)).collect();

        if self.fail_next_commit {
            self.fail_next_commit = false;
            return Err(TransactionError::CommitFailed {
                message: "injected commit failure".to_string(),
            }
            .into());
        }

        self.apply(staged).await;
        Ok(())
    }

    async fn rollback_transaction(&mut self) -> DomainResult<()> {
        self.in_transaction = false;
        self.tx_pending.clear();
        Ok(())
    }

    async fn save_changes(&mut self) -> DomainResult<u64> {
        if self.disposed {
            return Err(TransactionError::Disposed.into());
        }
        let staged: Vec<User> = self.pending.drain(..).collect();
        Ok(self.apply(staged).await)
    }

    async fn dispose(&mut self) -> DomainResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        self.in_transaction = false;
        self.tx_pending.clear();
        self.pending.clear();
        self.release_count += 1;
        Ok(())
    }

    fn has_active_transaction(&self) -> bool {
        self.in_transaction
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
