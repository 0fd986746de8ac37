//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Credence
//! application, following Clean Architecture principles. It provides the
//! concrete implementations behind the core's persistence and cache
//! boundaries.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL implementations of the user repository and the
//!   unit of work, using SQLx
//! - **Cache**: Redis client implementing the core's `CacheService`

// Re-export core error types for convenience
pub use cred_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and operations
pub mod cache;

pub use cache::RedisClient;
pub use database::{DatabasePool, MySqlUnitOfWork, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
