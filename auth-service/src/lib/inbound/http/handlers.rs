use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::user::errors::AuthError;
use crate::user::errors::LoginError;
use crate::user::errors::RegisterError;
use crate::user::errors::UserError;

pub mod dashboard;
pub mod index;
pub mod login;
pub mod profile;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<RegisterError> for ApiError {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::DuplicateKey(_) => ApiError::Conflict(err.to_string()),
            RegisterError::Hashing(_) | RegisterError::StoreUnavailable(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            LoginError::TokenIssuance(_) | LoginError::StoreUnavailable(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::StoreUnavailable(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public view of a user. Never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenError;

    use super::*;

    #[test]
    fn test_login_failures_share_one_response() {
        assert_eq!(
            ApiError::from(LoginError::InvalidCredentials),
            ApiError::Unauthorized("Invalid credentials".to_string())
        );
    }

    #[test]
    fn test_token_failures_collapse_to_unauthorized() {
        let kinds = [
            TokenError::Malformed("bad".to_string()),
            TokenError::InvalidSignature,
            TokenError::Expired,
        ];

        for kind in kinds {
            assert_eq!(
                ApiError::from(AuthError::Unauthorized(kind)),
                ApiError::Unauthorized("Unauthorized".to_string())
            );
        }
    }

    #[test]
    fn test_duplicate_registration_is_conflict() {
        let err = ApiError::from(RegisterError::DuplicateKey("alice@example.com".to_string()));
        assert!(matches!(err, ApiError::Conflict(ref msg) if msg.contains("already exists")));
    }

    #[test]
    fn test_store_faults_are_internal_errors() {
        assert!(matches!(
            ApiError::from(RegisterError::StoreUnavailable("down".to_string())),
            ApiError::InternalServerError(_)
        ));
        assert!(matches!(
            ApiError::from(LoginError::StoreUnavailable("down".to_string())),
            ApiError::InternalServerError(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::StoreUnavailable("down".to_string())),
            ApiError::InternalServerError(_)
        ));
    }

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (ApiError::InternalServerError("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::UnprocessableEntity("bad".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::NotFound("gone".to_string()), StatusCode::NOT_FOUND),
            (ApiError::Conflict("taken".to_string()), StatusCode::CONFLICT),
            (ApiError::Unauthorized("no".to_string()), StatusCode::UNAUTHORIZED),
            (ApiError::ServiceUnavailable("later".to_string()), StatusCode::SERVICE_UNAVAILABLE),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
