//! Unit-of-work trait coordinating repository access with an explicit
//! transaction lifecycle.
//!
//! A unit of work owns one persistence connection for its lifetime and is
//! scoped to one logical request; it is not a concurrency primitive and must
//! not be shared across concurrent operations. Transaction state moves
//! `Idle -> Active -> (Committed | RolledBack)` with at most one active
//! transaction per instance.
//!
//! Cancellation safety: every suspending method releases the transactional
//! context before awaiting the underlying driver call, and implementations
//! must roll back an open transaction when the unit of work is dropped, so a
//! cancelled future still routes through rollback-then-release.

use async_trait::async_trait;

use crate::errors::DomainResult;
use crate::repositories::user::UserRepository;

/// Transactional coordination point for persistence access
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Repository for user records
    ///
    /// Lazily constructed on first access; repeated calls within one
    /// unit-of-work lifetime return the same instance.
    fn users(&self) -> &dyn UserRepository;

    /// Open a transactional context
    ///
    /// Errors with `TransactionError::AlreadyActive` if a transaction is
    /// already open, and `TransactionError::Disposed` after `dispose`.
    async fn begin_transaction(&mut self) -> DomainResult<()>;

    /// Flush pending writes, then commit the open transaction
    ///
    /// The transactional context is released on every exit path, success or
    /// failure, leaving the unit of work `Idle`. Committing with no open
    /// transaction only flushes.
    async fn commit_transaction(&mut self) -> DomainResult<()>;

    /// Revert the open transaction
    ///
    /// The transactional context is released on every exit path; a rollback
    /// with no open transaction is a no-op.
    async fn rollback_transaction(&mut self) -> DomainResult<()>;

    /// Flush pending writes outside of an explicit transaction
    ///
    /// Returns the number of affected records.
    async fn save_changes(&mut self) -> DomainResult<u64>;

    /// Release the transactional context (if any) and the underlying
    /// persistence connection exactly once
    ///
    /// Idempotent: calls after the first are a no-op.
    async fn dispose(&mut self) -> DomainResult<()>;

    /// Whether a transaction is currently open
    fn has_active_transaction(&self) -> bool;

    /// Whether `dispose` has already run
    fn is_disposed(&self) -> bool;
}
