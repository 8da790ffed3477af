use chrono::DateTime;
use chrono::Utc;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::IssuedToken;
use crate::token::TokenError;
use crate::token::TokenService;

const PLACEHOLDER_PASSWORD: &str = "placeholder-password-never-matches";

/// Authentication coordinator combining password verification and token issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and token handling.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
    // Hashed with the configured work factor.
    placeholder_hash: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_hasher` - Configured credential hasher
    /// * `token_service` - Configured token issuer/verifier
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(password_hasher: PasswordHasher, token_service: TokenService) -> Self {
        let placeholder_hash = password_hasher
            .hash(PLACEHOLDER_PASSWORD)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to precompute placeholder hash");
                String::new()
            });

        Self {
            password_hasher,
            token_service,
            placeholder_hash,
        }
    }

    /// Current time according to the token service clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.token_service.now()
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier the token will assert
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_service.issue(subject)?)
    }

    /// Reject a login attempt for which no stored hash exists.
    ///
    /// Runs one full verification against a placeholder hash first, so
    /// the caller cannot tell an unknown identity from a wrong password
    /// by response time.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, &self.placeholder_hash);
        AuthenticationError::InvalidCredentials
    }

    /// Issue a token without password verification.
    ///
    /// Used right after registration, where the caller has just supplied
    /// the password being stored.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        self.token_service.issue(subject)
    }

    /// Validate a token and return its subject.
    ///
    /// # Errors
    /// * `Malformed`, `InvalidSignature`, `Expired` - Token rejected
    pub fn verify_token(&self, token: &str) -> Result<String, TokenError> {
        self.token_service.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::password::HashParams;

    fn authenticator() -> Authenticator {
        let hasher = PasswordHasher::with_params(HashParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();
        let tokens =
            TokenService::new(b"test_secret_key_at_least_32_bytes!", Duration::hours(1)).unwrap();
        Authenticator::new(hasher, tokens)
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let subject = authenticator
            .verify_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(subject, "user123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_against_malformed_hash() {
        let result = authenticator().authenticate("my_password", "not-a-phc-string", "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_reject_unknown_runs_real_verification() {
        let authenticator = authenticator();

        assert!(authenticator
            .placeholder_hash
            .starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
        assert!(matches!(
            authenticator.reject_unknown(PLACEHOLDER_PASSWORD),
            AuthenticationError::InvalidCredentials
        ));
        assert!(matches!(
            authenticator.reject_unknown("anything"),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_issue_and_verify_token() {
        let authenticator = authenticator();

        let token = authenticator
            .issue_token("user123")
            .expect("Failed to generate token");

        assert_eq!(
            authenticator.verify_token(&token.access_token).unwrap(),
            "user123"
        );
    }

    #[test]
    fn test_verify_invalid_token() {
        let result = authenticator().verify_token("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }
}
