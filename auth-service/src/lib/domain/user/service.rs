use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::IssuedToken;
use auth::TokenError;

use crate::domain::user::models::Credential;
use crate::domain::user::models::LoginResult;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::errors::LoginError;
use crate::user::errors::RegisterError;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for authentication.
///
/// Concrete implementation of AuthServicePort over any user store.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token handling
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, RegisterError> {
        // Fast path only; the store's unique constraint settles races.
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            tracing::info!(email = %command.email, "Registration rejected: email already registered");
            return Err(RegisterError::DuplicateKey(command.email.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())
            .map_err(|e| RegisterError::Hashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: self.authenticator.now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, credential: Credential) -> Result<LoginResult, LoginError> {
        let Some(user) = self.repository.find_by_email(&credential.email).await? else {
            tracing::debug!(email = %credential.email, "Login failed: unknown email");
            self.authenticator.reject_unknown(&credential.password);
            return Err(LoginError::InvalidCredentials);
        };

        let token = self
            .authenticator
            .authenticate(
                &credential.password,
                &user.password_hash,
                &user.id.to_string(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(user_id = %user.id, "Login failed: password mismatch");
                    LoginError::InvalidCredentials
                }
                AuthenticationError::TokenError(err) => LoginError::TokenIssuance(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, expires_at = %token.expires_at, "User logged in");

        Ok(LoginResult { user, token })
    }

    async fn authenticate(&self, token: &str) -> Result<UserId, AuthError> {
        let subject = self
            .authenticator
            .verify_token(token)
            .map_err(AuthError::Unauthorized)?;

        UserId::from_string(&subject)
            .map_err(|e| AuthError::Unauthorized(TokenError::Malformed(e.to_string())))
    }

    async fn issue_token(&self, user_id: &UserId) -> Result<IssuedToken, LoginError> {
        self.authenticator
            .issue_token(&user_id.to_string())
            .map_err(|e| LoginError::TokenIssuance(e.to_string()))
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
