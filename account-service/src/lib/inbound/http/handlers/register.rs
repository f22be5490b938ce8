use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SuccessBody;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<SuccessBody>, ApiError> {
    state
        .account_service
        .register(&body.email, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|_user| ApiSuccess::new(StatusCode::OK, SuccessBody::new()))
}

/// HTTP request body for account registration (raw JSON).
///
/// Fields default to empty strings so an absent key fails the same
/// validation rule as an empty value instead of tripping the framework's
/// deserialization rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}
