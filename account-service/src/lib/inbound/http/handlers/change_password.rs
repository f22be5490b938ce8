use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SuccessBody;
use crate::inbound::http::router::AppState;

pub async fn change_password(
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequestBody>,
) -> Result<ApiSuccess<SuccessBody>, ApiError> {
    state
        .account_service
        .change_password(&body.token, &body.new_password)
        .await
        .map_err(ApiError::from)
        .map(|()| ApiSuccess::new(StatusCode::OK, SuccessBody::new()))
}

/// HTTP request body for a password change (raw JSON).
///
/// The token travels in the body, not an Authorization header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangePasswordRequestBody {
    #[serde(default)]
    token: String,
    #[serde(default, rename = "newPassword")]
    new_password: String,
}
