use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::register::SessionResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Credential;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::user::errors::LoginError;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Login body rejected");
        LoginError::InvalidCredentials
    })?;
    let result = state.auth_service.login(body.try_into_credential()?).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SessionResponseData {
            user: (&result.user).into(),
            token: result.token.access_token,
            expires_at: result.token.expires_at,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Malformed input is reported exactly like a failed login.
    fn try_into_credential(self) -> Result<Credential, LoginError> {
        if self.password.is_empty() {
            return Err(LoginError::InvalidCredentials);
        }
        let email = EmailAddress::new(self.email).map_err(|_| LoginError::InvalidCredentials)?;
        Ok(Credential::new(email, self.password))
    }
}
