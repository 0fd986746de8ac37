//! Sign-in service configuration

use crate::domain::entities::token::REFRESH_TOKEN_EXPIRY_DAYS;

/// Configuration for the sign-in service
#[derive(Debug, Clone)]
pub struct SignInConfig {
    /// Lifetime shared by both refresh-token cache entries, in seconds
    pub refresh_token_ttl_seconds: u64,
}

impl Default for SignInConfig {
    fn default() -> Self {
        Self {
            refresh_token_ttl_seconds: REFRESH_TOKEN_EXPIRY_DAYS as u64 * 86_400,
        }
    }
}

impl SignInConfig {
    /// Override the refresh-token cache lifetime
    pub fn with_refresh_ttl_days(days: u64) -> Self {
        Self {
            refresh_token_ttl_seconds: days * 86_400,
        }
    }
}
