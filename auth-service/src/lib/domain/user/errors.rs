use auth::TokenError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for display name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name is required")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for password policy violations at registration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
}

/// Failures reported by a user store implementation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("User already exists with email: {0}")]
    DuplicateKey(String),

    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Registration failures
#[derive(Debug, Clone, Error)]
pub enum RegisterError {
    #[error("User already exists with email: {0}")]
    DuplicateKey(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<UserStoreError> for RegisterError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::DuplicateKey(email) => RegisterError::DuplicateKey(email),
            UserStoreError::Unavailable(msg) => RegisterError::StoreUnavailable(msg),
        }
    }
}

/// Login failures.
///
/// An unknown email and a wrong password are both `InvalidCredentials`.
#[derive(Debug, Clone, Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<UserStoreError> for LoginError {
    fn from(err: UserStoreError) -> Self {
        match err {
            // A lookup never produces a duplicate; treat it as a store fault.
            UserStoreError::DuplicateKey(msg) | UserStoreError::Unavailable(msg) => {
                LoginError::StoreUnavailable(msg)
            }
        }
    }
}

/// Token authentication failure.
///
/// Callers only ever see `Unauthorized`; the wrapped kind is kept for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unauthorized")]
    Unauthorized(TokenError),
}

impl AuthError {
    /// The underlying token rejection.
    pub fn reason(&self) -> &TokenError {
        match self {
            AuthError::Unauthorized(reason) => reason,
        }
    }
}

/// Errors resolving a user record
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<UserStoreError> for UserError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::DuplicateKey(msg) | UserStoreError::Unavailable(msg) => {
                UserError::StoreUnavailable(msg)
            }
        }
    }
}
