//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AuthError, ErrorResponse, TokenError, TransactionError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// A refresh-token cache write did not complete; issued tokens must not
    /// be trusted after this
    #[error("Cache write failed: {message}")]
    CacheWriteFailure { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Auth(auth) => auth.into(),
            DomainError::Token(token) => token.into(),
            DomainError::Transaction(tx) => tx.into(),
            DomainError::CacheWriteFailure { .. } => {
                ErrorResponse::new("CACHE_WRITE_FAILURE", err.to_string())
            }
            DomainError::Database { .. } => ErrorResponse::new("DATABASE_ERROR", err.to_string()),
            DomainError::Internal { .. } => ErrorResponse::new("INTERNAL_ERROR", err.to_string()),
        }
    }
}
