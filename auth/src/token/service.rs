use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::SubsecRound;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use mockable::Clock;
use mockable::DefaultClock;

use super::claims::Claims;
use super::errors::TokenError;

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWT string
    pub access_token: String,
    /// Instant after which the token is rejected
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies signed, expiring access tokens.
///
/// Tokens are HS256 JWTs carrying `sub`, `iat` and `exp`. The signing
/// secret and time-to-live are fixed at construction; the current time
/// comes from an injected clock so expiry can be driven in tests.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TokenService {
    /// Create a new token service using the system clock.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Lifetime of every issued token
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Secret is empty or TTL is not positive
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::InvalidConfiguration(
                "signing secret must not be empty".to_string(),
            ));
        }
        if ttl <= Duration::zero() {
            return Err(TokenError::InvalidConfiguration(format!(
                "token ttl must be positive, got {} seconds",
                ttl.num_seconds()
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
            clock: Arc::new(DefaultClock),
        })
    }

    /// Replace the clock used for `iat`, `exp` and expiry checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    /// Configured token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Issue a token asserting `subject`.
    ///
    /// Both instants are truncated to whole seconds, so the returned
    /// `expires_at` is exactly the `exp` claim the token carries.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        let issued_at = self.now().trunc_subsecs(0);
        let expires_at = (issued_at + self.ttl).trunc_subsecs(0);
        let claims = Claims::new(subject, issued_at, expires_at);

        let access_token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }

    /// Verify a presented token and return its subject.
    ///
    /// The HMAC is recomputed over the header and payload and compared in
    /// constant time before the payload is trusted. Expiry is checked
    /// against the injected clock rather than the system time.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be split, decoded or lacks required claims
    /// * `InvalidSignature` - Signature does not match the payload
    /// * `Expired` - Current time is past `exp`
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(self.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims.sub)
    }
}
