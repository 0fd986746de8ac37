//! MySQL-backed unit of work over SQLx transactions.

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use sqlx::{MySql, MySqlPool, Transaction};
use tracing::{debug, warn};

use cred_core::errors::{DomainResult, TransactionError};
use cred_core::repositories::unit_of_work::UnitOfWork;
use cred_core::repositories::user::UserRepository;

use super::user_repository_impl::MySqlUserRepository;

/// Unit of work coordinating repository access over one MySQL pool handle
///
/// One instance is scoped to one logical request and owns its transaction
/// state exclusively. The repository is built lazily on first access and
/// reused for the instance's lifetime.
///
/// SQLx executes statements eagerly, so `save_changes` never has a buffered
/// write to flush and reports zero affected records; explicit transactions
/// cover multi-statement atomicity. Dropping the unit of work (including a
/// cancelled future holding it) rolls back any open transaction through the
/// SQLx `Transaction` drop guard.
pub struct MySqlUnitOfWork {
    pool: MySqlPool,
    transaction: Option<Transaction<'static, MySql>>,
    users: OnceCell<MySqlUserRepository>,
    disposed: bool,
}

impl MySqlUnitOfWork {
    /// Create a unit of work over a pool handle
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            transaction: None,
            users: OnceCell::new(),
            disposed: false,
        }
    }
}

#[async_trait]
impl UnitOfWork for MySqlUnitOfWork {
    fn users(&self) -> &dyn UserRepository {
        self.users
            .get_or_init(|| MySqlUserRepository::new(self.pool.clone()))
    }

    async fn begin_transaction(&mut self) -> DomainResult<()> {
        if self.disposed {
            return Err(TransactionError::Disposed.into());
        }
        if self.transaction.is_some() {
            return Err(TransactionError::AlreadyActive.into());
        }

        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TransactionError::BeginFailed {
                message: e.to_string(),
            })?;
        self.transaction = Some(tx);
        debug!("Transaction opened");
        Ok(())
    }

    async fn commit_transaction(&mut self) -> DomainResult<()> {
        // Taking the handle out of the slot first releases the transactional
        // context on every exit path, including a failed commit.
        match self.transaction.take() {
            Some(tx) => {
                tx.commit().await.map_err(|e| {
                    warn!("Transaction commit failed: {}", e);
                    TransactionError::CommitFailed {
                        message: e.to_string(),
                    }
                })?;
                debug!("Transaction committed");
                Ok(())
            }
            // Nothing open: statements already executed eagerly, so a
            // commit degenerates to a flush-only no-op.
            None => Ok(()),
        }
    }

    async fn rollback_transaction(&mut self) -> DomainResult<()> {
        match self.transaction.take() {
            Some(tx) => {
                tx.rollback().await.map_err(|e| {
                    warn!("Transaction rollback failed: {}", e);
                    TransactionError::RollbackFailed {
                        message: e.to_string(),
                    }
                })?;
                debug!("Transaction rolled back");
                Ok(())
            }
            None => Ok(()),
        }
    }

    async fn save_changes(&mut self) -> DomainResult<u64> {
        if self.disposed {
            return Err(TransactionError::Disposed.into());
        }
        // Statements run eagerly through SQLx; there is never a buffered
        // write waiting here.
        Ok(0)
    }

    async fn dispose(&mut self) -> DomainResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;

        if let Some(tx) = self.transaction.take() {
            if let Err(e) = tx.rollback().await {
                warn!("Rollback during dispose failed: {}", e);
            }
        }
        debug!("Unit of work disposed");
        Ok(())
    }

    fn has_active_transaction(&self) -> bool {
        self.transaction.is_some()
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
