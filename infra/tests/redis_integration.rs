//! Redis integration tests
//!
//! These tests require a running Redis instance (REDIS_URL, defaulting to
//! redis://localhost:6379) and are ignored by default. Run with:
//! `cargo test -p cred_infra --test redis_integration -- --ignored`

use cred_core::services::cache::CacheService;
use cred_infra::cache::{CacheConfig, RedisClient};

fn test_config() -> CacheConfig {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
    CacheConfig::new(url)
}

#[tokio::test]
#[ignore]
async fn test_set_get_delete_roundtrip() {
    let client = RedisClient::new(test_config()).await.unwrap();

    client
        .set_string("it:refresh_token:roundtrip", "token-value", 60)
        .await
        .unwrap();

    let value = client.get_string("it:refresh_token:roundtrip").await.unwrap();
    assert_eq!(value.as_deref(), Some("token-value"));

    assert!(client.delete("it:refresh_token:roundtrip").await.unwrap());
    assert!(client
        .get_string("it:refresh_token:roundtrip")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore]
async fn test_set_is_an_idempotent_overwrite() {
    let client = RedisClient::new(test_config()).await.unwrap();

    client
        .set_string("it:overwrite", "first", 60)
        .await
        .unwrap();
    client
        .set_string("it:overwrite", "second", 60)
        .await
        .unwrap();

    let value = client.get_string("it:overwrite").await.unwrap();
    assert_eq!(value.as_deref(), Some("second"));

    client.delete("it:overwrite").await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_missing_key_reads_as_absent() {
    let client = RedisClient::new(test_config()).await.unwrap();

    let value = client.get_string("it:does-not-exist").await.unwrap();
    assert!(value.is_none());
    assert!(!client.delete("it:does-not-exist").await.unwrap());
}
