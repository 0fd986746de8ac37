//! Unit tests for the sign-in use case

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::unit_of_work::MockUnitOfWork;
use crate::services::auth::{refresh_token_key, refresh_token_lookup_key, SignInConfig, SignInRequest, SignInService};

use super::mocks::{MockCacheService, MockTokenIssuer, PlaintextPasswordVerifier};

const THIRTY_DAYS: u64 = 30 * 86_400;

fn service(
    cache: Arc<MockCacheService>,
) -> SignInService<MockCacheService, MockTokenIssuer, PlaintextPasswordVerifier> {
    SignInService::new(
        cache,
        Arc::new(MockTokenIssuer::new()),
        Arc::new(PlaintextPasswordVerifier),
        SignInConfig::default(),
    )
}

fn stored_user() -> User {
    // Stored role deliberately differs in case from what tests supply.
    User::new("alice".to_string(), "correct".to_string(), "User".to_string())
}

fn request(username: &str, password: &str, role: &str) -> SignInRequest {
    SignInRequest {
        username: username.to_string(),
        password: password.to_string(),
        role: role.to_string(),
    }
}

#[tokio::test]
async fn test_successful_sign_in_writes_both_cache_entries() {
    let user = stored_user();
    let user_id = user.id;
    let uow = MockUnitOfWork::with_existing_user(user);
    let cache = Arc::new(MockCacheService::new());
    let service = service(cache.clone());

    let pair = service
        .sign_in(&uow, &request("alice", "correct", "user"))
        .await
        .unwrap();

    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
    assert_ne!(pair.access_token, pair.refresh_token);

    // Both directions exist, are mutually consistent, and share one TTL.
    let (token_value, token_ttl) = cache.entry(&refresh_token_key(user_id)).unwrap();
    let (lookup_value, lookup_ttl) = cache
        .entry(&refresh_token_lookup_key(&pair.refresh_token))
        .unwrap();

    assert_eq!(token_value, pair.refresh_token);
    assert_eq!(lookup_value, user_id.to_string());
    assert_eq!(token_ttl, THIRTY_DAYS);
    assert_eq!(lookup_ttl, THIRTY_DAYS);
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn test_role_comparison_ignores_case() {
    let uow = MockUnitOfWork::with_existing_user(stored_user());
    let cache = Arc::new(MockCacheService::new());
    let service = service(cache);

    // Stored role is "User"; any case variation must match.
    assert!(service
        .sign_in(&uow, &request("alice", "correct", "USER"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_unknown_username_fails_not_found_without_cache_writes() {
    let uow = MockUnitOfWork::with_existing_user(stored_user());
    let cache = Arc::new(MockCacheService::new());
    let service = service(cache.clone());

    let result = service
        .sign_in(&uow, &request("ghost", "anything", "user"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountNotFound))
    ));
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.write_attempts(), 0);
}

#[tokio::test]
async fn test_wrong_password_fails_invalid_credentials_without_cache_writes() {
    let uow = MockUnitOfWork::with_existing_user(stored_user());
    let cache = Arc::new(MockCacheService::new());
    let service = service(cache.clone());

    let result = service
        .sign_in(&uow, &request("alice", "wrong", "user"))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert_eq!(cache.write_attempts(), 0);
}

#[tokio::test]
async fn test_wrong_role_is_indistinguishable_from_wrong_password() {
    let uow = MockUnitOfWork::with_existing_user(stored_user());
    let cache = Arc::new(MockCacheService::new());
    let service = service(cache);

    let wrong_role = service
        .sign_in(&uow, &request("alice", "correct", "admin"))
        .await;
    let wrong_password = service
        .sign_in(&uow, &request("alice", "wrong", "user"))
        .await;
    let wrong_both = service
        .sign_in(&uow, &request("alice", "wrong", "admin"))
        .await;

    for result in [wrong_role, wrong_password, wrong_both] {
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InvalidCredentials))
        ));
    }
}

#[tokio::test]
async fn test_cache_write_failure_fails_the_sign_in() {
    let uow = MockUnitOfWork::with_existing_user(stored_user());
    let cache = Arc::new(MockCacheService::failing());
    let service = service(cache.clone());

    let result = service
        .sign_in(&uow, &request("alice", "correct", "user"))
        .await;

    // The issued tokens never reach the caller.
    assert!(matches!(
        result,
        Err(DomainError::CacheWriteFailure { .. })
    ));
    // Both writes were attempted concurrently before the failure surfaced.
    assert_eq!(cache.write_attempts(), 2);
    assert_eq!(cache.len(), 0);
}

#[tokio::test]
async fn test_repeated_sign_in_overwrites_previous_session() {
    let user = stored_user();
    let user_id = user.id;
    let uow = MockUnitOfWork::with_existing_user(user);
    let cache = Arc::new(MockCacheService::new());
    let service = service(cache.clone());

    let first = service
        .sign_in(&uow, &request("alice", "correct", "user"))
        .await
        .unwrap();
    let second = service
        .sign_in(&uow, &request("alice", "correct", "user"))
        .await
        .unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);

    // The user-direction entry now holds the new token, and only the new
    // token resolves through the lookup direction.
    let (token_value, _) = cache.entry(&refresh_token_key(user_id)).unwrap();
    assert_eq!(token_value, second.refresh_token);
    assert!(cache
        .entry(&refresh_token_lookup_key(&second.refresh_token))
        .is_some());
    assert!(cache
        .entry(&refresh_token_lookup_key(&first.refresh_token))
        .is_none());
}
