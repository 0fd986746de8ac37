//! End-to-end sign-in flow with real token and password collaborators
//!
//! Exercises the use case against the JWT issuer and the bcrypt verifier,
//! with only the persistence and cache boundaries mocked.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use cred_core::domain::entities::token::Claims;
use cred_core::domain::entities::user::User;
use cred_core::errors::{AuthError, DomainError};
use cred_core::repositories::unit_of_work::MockUnitOfWork;
use cred_core::services::auth::{
    refresh_token_key, refresh_token_lookup_key, SignInConfig, SignInRequest, SignInService,
};
use cred_core::services::cache::CacheService;
use cred_core::services::password::BcryptPasswordVerifier;
use cred_core::services::token::{JwtTokenService, TokenIssuer, TokenServiceConfig};

/// Minimal in-memory cache standing in for Redis
struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, u64)>>,
}

impl InMemoryCache {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entry(&self, key: &str) -> Option<(String, u64)> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn set_string(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(value, _)| value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }
}

fn token_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "integration-test-secret".to_string(),
        ..TokenServiceConfig::default()
    }
}

fn decode_claims(token: &str, config: &TokenServiceConfig) -> Claims {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .expect("token must decode with the signing secret")
    .claims
}

fn stored_user(password: &str) -> User {
    let hash = bcrypt::hash(password, 4).expect("hashing must succeed");
    User::new("alice".to_string(), hash, "User".to_string())
}

type FullService = SignInService<InMemoryCache, JwtTokenService, BcryptPasswordVerifier>;

fn full_service(cache: Arc<InMemoryCache>, config: &TokenServiceConfig) -> FullService {
    SignInService::new(
        cache,
        Arc::new(JwtTokenService::new(config.clone())),
        Arc::new(BcryptPasswordVerifier::new()),
        SignInConfig::default(),
    )
}

#[tokio::test]
async fn sign_in_issues_decodable_tokens_and_consistent_cache_state() {
    let user = stored_user("correct");
    let user_id = user.id;
    let uow = MockUnitOfWork::with_existing_user(user);
    let cache = Arc::new(InMemoryCache::new());
    let config = token_config();
    let service = full_service(cache.clone(), &config);

    let request = SignInRequest {
        username: "alice".to_string(),
        password: "correct".to_string(),
        role: "user".to_string(),
    };
    let pair = service.sign_in(&uow, &request).await.unwrap();

    // Access token carries the full identity.
    let claims = decode_claims(&pair.access_token, &config);
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, "User");

    // Cache state is mutually consistent under a shared 30-day expiry.
    let (token_value, token_ttl) = cache.entry(&refresh_token_key(user_id)).unwrap();
    let (lookup_value, lookup_ttl) = cache
        .entry(&refresh_token_lookup_key(&pair.refresh_token))
        .unwrap();
    assert_eq!(token_value, pair.refresh_token);
    assert_eq!(lookup_value, user_id.to_string());
    assert_eq!(token_ttl, 30 * 86_400);
    assert_eq!(token_ttl, lookup_ttl);
}

#[tokio::test]
async fn sign_in_with_wrong_password_is_rejected_by_bcrypt() {
    let user = stored_user("correct");
    let user_id = user.id;
    let uow = MockUnitOfWork::with_existing_user(user);
    let cache = Arc::new(InMemoryCache::new());
    let config = token_config();
    let service = full_service(cache.clone(), &config);

    let request = SignInRequest {
        username: "alice".to_string(),
        password: "wrong".to_string(),
        role: "user".to_string(),
    };
    let result = service.sign_in(&uow, &request).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(cache.entry(&refresh_token_key(user_id)).is_none());
}

#[tokio::test]
async fn token_issuer_is_deterministic_in_structure_but_unique_in_content() {
    let user = stored_user("correct");
    let issuer = JwtTokenService::new(token_config());

    let first = issuer.generate_refresh_token(&user).unwrap();
    let second = issuer.generate_refresh_token(&user).unwrap();

    // Same shape, distinct jti.
    assert_ne!(first, second);
}
