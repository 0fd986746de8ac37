//! Error type definitions for authentication, token issuance, and the
//! unit-of-work transaction lifecycle.
//!
//! Human-facing rendering of these errors belongs to the presentation layer;
//! this module only fixes the machine-readable taxonomy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No account matches the supplied username
    #[error("Account does not exist")]
    AccountNotFound,

    /// Password or role mismatch. Deliberately a single variant so the
    /// caller cannot tell which check failed.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token generation failed: {reason}")]
    GenerationFailed { reason: String },
}

/// Unit-of-work transaction lifecycle errors
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("A transaction is already active")]
    AlreadyActive,

    #[error("Unit of work has been disposed")]
    Disposed,

    #[error("Failed to begin transaction: {message}")]
    BeginFailed { message: String },

    #[error("Failed to commit transaction: {message}")]
    CommitFailed { message: String },

    #[error("Failed to roll back transaction: {message}")]
    RollbackFailed { message: String },
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a single detail to the error response
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::GenerationFailed { .. } => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

impl From<TransactionError> for ErrorResponse {
    fn from(err: TransactionError) -> Self {
        let error_code = match &err {
            TransactionError::AlreadyActive => "TRANSACTION_ALREADY_ACTIVE",
            TransactionError::Disposed => "UNIT_OF_WORK_DISPOSED",
            TransactionError::BeginFailed { .. } => "TRANSACTION_BEGIN_FAILED",
            TransactionError::CommitFailed { .. } => "TRANSACTION_COMMIT_FAILED",
            TransactionError::RollbackFailed { .. } => "TRANSACTION_ROLLBACK_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
