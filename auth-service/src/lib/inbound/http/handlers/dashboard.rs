use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<DashboardResponseData>, ApiError> {
    state
        .auth_service
        .get_user(&authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardResponseData {
    pub message: String,
    pub user_id: String,
    pub email: String,
    pub member_since: DateTime<Utc>,
}

impl From<&User> for DashboardResponseData {
    fn from(user: &User) -> Self {
        Self {
            message: format!("Welcome to your dashboard, {}!", user.name),
            user_id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            member_since: user.created_at,
        }
    }
}
