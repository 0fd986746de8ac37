//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time; the cache entries share this clock
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 30;

/// JWT issuer
pub const JWT_ISSUER: &str = "credence";

/// JWT audience
pub const JWT_AUDIENCE: &str = "credence-api";

/// Pair of tokens returned by a successful sign-in
///
/// Transient value object: the pair itself is never persisted. The refresh
/// half is recorded only as cache state under the dual-keyed session entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived token presented on subsequent requests
    pub access_token: String,

    /// Long-lived token exchanged later for new access tokens
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

/// Claims structure for JWT payload
///
/// Both token kinds carry the full user identity (id, username, role) so the
/// issuer never needs a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Username of the subject
    pub username: String,

    /// Role tag of the subject
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access_token(user: &User, issuer: &str, audience: &str, expiry_minutes: i64) -> Self {
        Self::with_lifetime(user, issuer, audience, Duration::minutes(expiry_minutes))
    }

    /// Creates new claims for a refresh token
    pub fn new_refresh_token(user: &User, issuer: &str, audience: &str, expiry_days: i64) -> Self {
        Self::with_lifetime(user, issuer, audience, Duration::days(expiry_days))
    }

    fn with_lifetime(user: &User, issuer: &str, audience: &str, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + lifetime;

        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }
}
