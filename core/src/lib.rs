//! # Credence Core
//!
//! Core business logic and domain layer for the Credence backend.
//! This crate contains domain entities, the sign-in use case, repository
//! and unit-of-work interfaces, and error types that form the foundation
//! of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, TokenPair, User};
pub use errors::{
    AuthError, DomainError, DomainResult, ErrorResponse, TokenError, TransactionError,
};
pub use repositories::{MockUnitOfWork, MockUserRepository, UnitOfWork, UserRepository};
pub use services::{
    BcryptPasswordVerifier, CacheService, JwtTokenService, PasswordVerifier, SignInConfig,
    SignInRequest, SignInService, TokenIssuer, TokenServiceConfig,
};
