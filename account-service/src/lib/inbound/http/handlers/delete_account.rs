use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SuccessBody;
use crate::inbound::http::router::AppState;

pub async fn delete_account(
    State(state): State<AppState>,
    Json(body): Json<DeleteAccountRequestBody>,
) -> Result<ApiSuccess<SuccessBody>, ApiError> {
    state
        .account_service
        .delete_account(&body.token)
        .await
        .map_err(ApiError::from)
        .map(|()| ApiSuccess::new(StatusCode::OK, SuccessBody::new()))
}

/// HTTP request body for account deletion (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteAccountRequestBody {
    #[serde(default)]
    token: String,
}
