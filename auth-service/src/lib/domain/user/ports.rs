use async_trait::async_trait;
use auth::IssuedToken;

use crate::domain::user::models::Credential;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginResult;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::errors::LoginError;
use crate::user::errors::RegisterError;
use crate::user::errors::UserError;
use crate::user::errors::UserStoreError;

/// Port for authentication operations exposed to inbound adapters.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated name, email, and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `DuplicateKey` - Email is already registered
    /// * `Hashing` - Password hashing failed
    /// * `StoreUnavailable` - User store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, RegisterError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `credential` - Email and plaintext password
    ///
    /// # Returns
    /// Authenticated user and token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `TokenIssuance` - Token signing failed
    /// * `StoreUnavailable` - User store operation failed
    async fn login(&self, credential: Credential) -> Result<LoginResult, LoginError>;

    /// Resolve a presented bearer token to the user it asserts.
    ///
    /// # Errors
    /// * `Unauthorized` - Token is malformed, forged, or expired
    async fn authenticate(&self, token: &str) -> Result<UserId, AuthError>;

    /// Issue a token for an already identified user.
    ///
    /// # Errors
    /// * `TokenIssuance` - Token signing failed
    async fn issue_token(&self, user_id: &UserId) -> Result<IssuedToken, LoginError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `StoreUnavailable` - User store operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// Uniqueness of the email must be enforced atomically by the store.
    ///
    /// # Errors
    /// * `DuplicateKey` - Email is already registered
    /// * `Unavailable` - Storage operation failed
    async fn create(&self, user: User) -> Result<User, UserStoreError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Storage operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Storage operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserStoreError>;
}
