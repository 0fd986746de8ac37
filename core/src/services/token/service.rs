//! JWT token issuance

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Opaque token issuance capability
///
/// Both operations derive the token from the full user identity (id,
/// username, role) and must not mutate the user. Token verification is a
/// separate concern and is not part of this contract.
pub trait TokenIssuer: Send + Sync {
    /// Produce a signed short-lived access token for the user
    fn generate_access_token(&self, user: &User) -> Result<String, DomainError>;

    /// Produce a signed long-lived refresh token for the user
    fn generate_refresh_token(&self, user: &User) -> Result<String, DomainError>;
}

/// HS256 JWT implementation of `TokenIssuer`
pub struct JwtTokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
}

impl JwtTokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            encoding_key,
        }
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            TokenError::GenerationFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl TokenIssuer for JwtTokenService {
    fn generate_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(
            user,
            &self.config.issuer,
            &self.config.audience,
            self.config.access_token_expiry_minutes,
        );
        self.encode_claims(&claims)
    }

    fn generate_refresh_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new_refresh_token(
            user,
            &self.config.issuer,
            &self.config.audience,
            self.config.refresh_token_expiry_days,
        );
        self.encode_claims(&claims)
    }
}
