//! Credential and token primitives
//!
//! Provides the building blocks of password authentication:
//! - Password hashing (Argon2id, salted, tunable work factor)
//! - Signed, expiring access tokens (HS256 JWT) with an injectable clock
//! - Authentication coordination
//!
//! Nothing here touches storage; services own their user records and call
//! into these types with explicit secrets and parameters.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//! let issued = tokens.issue("user123").unwrap();
//! assert_eq!(tokens.verify(&issued.access_token).unwrap(), "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenService};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     PasswordHasher::new(),
//!     TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap(),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let issued = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Validate token
//! let subject = auth.verify_token(&issued.access_token).unwrap();
//! assert_eq!(subject, "user123");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::HashParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::IssuedToken;
pub use token::TokenError;
pub use token::TokenService;
