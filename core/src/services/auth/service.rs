//! Sign-in use case turning credentials into a token pair.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::unit_of_work::UnitOfWork;
use crate::repositories::user::UserRepository;
use crate::services::cache::CacheService;
use crate::services::password::PasswordVerifier;
use crate::services::token::TokenIssuer;

use super::config::SignInConfig;

/// Key prefix for the user -> refresh token cache direction
const REFRESH_TOKEN_KEY_PREFIX: &str = "refresh_token:";

/// Key prefix for the refresh token -> user cache direction
const REFRESH_TOKEN_LOOKUP_KEY_PREFIX: &str = "refresh_token_lookup:";

/// Cache key holding the active refresh token for a user
pub fn refresh_token_key(user_id: Uuid) -> String {
    format!("{}{}", REFRESH_TOKEN_KEY_PREFIX, user_id)
}

/// Cache key resolving a refresh token back to its user
pub fn refresh_token_lookup_key(refresh_token: &str) -> String {
    format!("{}{}", REFRESH_TOKEN_LOOKUP_KEY_PREFIX, refresh_token)
}

/// Sign-in request carrying the raw credentials
///
/// Field validation (empty/missing values) is the transport layer's job;
/// this use case assumes the fields are populated.
#[derive(Clone)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Sign-in service orchestrating the authentication flow
///
/// One unit of work is passed per call and must be scoped to that logical
/// request; the service itself is stateless and may be shared.
pub struct SignInService<C, T, P>
where
    C: CacheService,
    T: TokenIssuer,
    P: PasswordVerifier,
{
    /// Cache store for the dual-keyed refresh-token entries
    cache_service: Arc<C>,
    /// Opaque token signing collaborator
    token_issuer: Arc<T>,
    /// Opaque password hash collaborator
    password_verifier: Arc<P>,
    /// Service configuration
    config: SignInConfig,
}

impl<C, T, P> SignInService<C, T, P>
where
    C: CacheService,
    T: TokenIssuer,
    P: PasswordVerifier,
{
    /// Create a new sign-in service
    pub fn new(
        cache_service: Arc<C>,
        token_issuer: Arc<T>,
        password_verifier: Arc<P>,
        config: SignInConfig,
    ) -> Self {
        Self {
            cache_service,
            token_issuer,
            password_verifier,
            config,
        }
    }

    /// Execute the sign-in flow
    ///
    /// 1. Look up the user by exact username.
    /// 2. Verify the password against the stored hash and the supplied role
    ///    against the stored role (case-insensitive).
    /// 3. Issue an access and a refresh token from the full user identity.
    /// 4. Record the refresh token in the cache under both lookup
    ///    directions with a shared expiry.
    ///
    /// # Errors
    ///
    /// * `AuthError::AccountNotFound` - no record for the username
    /// * `AuthError::InvalidCredentials` - password or role mismatch; the
    ///   two cases are indistinguishable by design
    /// * `DomainError::CacheWriteFailure` - either cache write failed; the
    ///   issued tokens must not be trusted
    ///
    /// No retries happen here; retry policy belongs to the caller.
    pub async fn sign_in<U: UnitOfWork>(
        &self,
        uow: &U,
        request: &SignInRequest,
    ) -> DomainResult<TokenPair> {
        debug!("Sign-in attempt for username: {}", request.username);

        // Step 1: credential record lookup
        let user = uow
            .users()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Sign-in rejected: no account for username: {}", request.username);
                AuthError::AccountNotFound
            })?;

        // Step 2: password and role check. One error covers both so the
        // caller cannot tell which check failed.
        let password_ok = self
            .password_verifier
            .verify(&request.password, &user.password_hash)?;
        if !password_ok || !user.role_matches(&request.role) {
            warn!("Sign-in rejected for user {}: credential mismatch", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        // Step 3: token issuance from the full user identity
        let access_token = self.token_issuer.generate_access_token(&user)?;
        let refresh_token = self.token_issuer.generate_refresh_token(&user)?;

        // Step 4: dual cache write under a shared expiry
        self.persist_refresh_token(user.id, &refresh_token).await?;

        info!("Sign-in succeeded for user {}", user.id);
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Record the refresh token under both lookup directions with one TTL
    ///
    /// The two writes are independent and issued concurrently; the operation
    /// succeeds only when both complete. There is no compensating rollback
    /// for a partial write: the failure propagates and the caller must not
    /// use the tokens.
    async fn persist_refresh_token(
        &self,
        user_id: Uuid,
        refresh_token: &str,
    ) -> DomainResult<()> {
        let user_key = refresh_token_key(user_id);

        // Drop the reverse entry of any token being overwritten, so a
        // replaced refresh token stops resolving. Best effort: expiry
        // reclaims the entry anyway.
        match self.cache_service.get_string(&user_key).await {
            Ok(Some(previous)) if previous != refresh_token => {
                if let Err(e) = self
                    .cache_service
                    .delete(&refresh_token_lookup_key(&previous))
                    .await
                {
                    warn!(
                        "Failed to drop stale refresh token lookup for user {}: {}",
                        user_id, e
                    );
                }
            }
            Ok(_) => {}
            Err(e) => warn!(
                "Failed to read prior refresh token for user {}: {}",
                user_id, e
            ),
        }

        let lookup_key = refresh_token_lookup_key(refresh_token);
        let user_id_value = user_id.to_string();
        let ttl = self.config.refresh_token_ttl_seconds;

        // Both writes run concurrently and both are awaited; either failure
        // fails the sign-in before any response is produced.
        let (user_entry, lookup_entry) = tokio::join!(
            self.cache_service.set_string(&user_key, refresh_token, ttl),
            self.cache_service.set_string(&lookup_key, &user_id_value, ttl),
        );
        user_entry?;
        lookup_entry?;

        debug!("Refresh token cached for user {} (ttl {}s)", user_id, ttl);
        Ok(())
    }
}
