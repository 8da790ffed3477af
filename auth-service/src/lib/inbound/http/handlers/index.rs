use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;

pub async fn index() -> ApiSuccess<IndexResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        IndexResponseData {
            message: "Authentication API is running",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: Endpoints {
                register: "POST /api/auth/register",
                login: "POST /api/auth/login",
                profile: "GET /api/user/profile (Protected)",
                dashboard: "GET /api/user/dashboard (Protected)",
            },
        },
    )
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexResponseData {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    pub register: &'static str,
    pub login: &'static str,
    pub profile: &'static str,
    pub dashboard: &'static str,
}
