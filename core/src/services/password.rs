//! Password verification capability.
//!
//! The hash primitive is an opaque collaborator of the sign-in flow: the
//! domain only needs `verify(plaintext, hash) -> bool`. Algorithm choices
//! stay behind this trait.

use crate::errors::DomainError;

/// Opaque password check against a stored hash
pub trait PasswordVerifier: Send + Sync {
    /// Check a plaintext password against a stored hash
    ///
    /// Neither argument may end up in logs or error messages.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError>;
}

/// Bcrypt-backed password verifier
#[derive(Debug, Clone, Default)]
pub struct BcryptPasswordVerifier;

impl BcryptPasswordVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordVerifier for BcryptPasswordVerifier {
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(password, password_hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_matching_password() {
        let hash = bcrypt::hash("correct horse", bcrypt::DEFAULT_COST).unwrap();
        let verifier = BcryptPasswordVerifier::new();

        assert!(verifier.verify("correct horse", &hash).unwrap());
        assert!(!verifier.verify("battery staple", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error_not_a_mismatch() {
        let verifier = BcryptPasswordVerifier::new();
        let result = verifier.verify("anything", "not-a-bcrypt-hash");

        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
