//! Shared configuration for Credence services
//!
//! This crate provides the configuration types used across all server modules:
//! - Environment detection and logging configuration
//! - Database connection and pool configuration
//! - Cache (Redis) configuration
//! - Authentication (JWT) configuration

pub mod config;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
};
