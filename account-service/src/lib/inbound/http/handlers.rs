use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::account::errors::AccountError;

pub mod change_password;
pub mod delete_account;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

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
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Body for operations that report nothing beyond success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessBody {
    pub success: bool,
}

impl SuccessBody {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for SuccessBody {
    fn default() -> Self {
        Self::new()
    }
}

/// Body carrying a freshly issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenBody {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                // The detail goes to the log; the caller gets a generic body.
                tracing::error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidEmail(_)
            | AccountError::WeakPassword(_)
            | AccountError::MissingField(_)
            | AccountError::DuplicateEmail
            | AccountError::UserNotFound => ApiError::BadRequest(err.to_string()),
            AccountError::WrongPassword | AccountError::InvalidToken(_) => {
                ApiError::Unauthorized(err.to_string())
            }
            AccountError::Hashing(_) | AccountError::TokenIssuance(_) | AccountError::Store(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Error body: every failure answers `{"error": <message>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}
