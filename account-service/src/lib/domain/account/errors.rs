use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress shape validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email must not contain whitespace")]
    ContainsWhitespace,

    #[error("email must contain an '@'")]
    MissingAtSign,

    #[error("email must contain exactly one '@'")]
    MultipleAtSigns,

    #[error("email is missing the part before '@'")]
    EmptyLocalPart,

    #[error("email domain must contain a '.'")]
    MissingDomainDot,
}

/// Error for password strength policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("password too long: maximum {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("password must contain an uppercase letter")]
    MissingUppercase,

    #[error("password must contain a character that is not a letter or digit")]
    MissingSpecialChar,
}

/// Error for store adapter operations.
///
/// Conflict and absence are explicit variants so the service layer can
/// match on outcomes instead of inspecting driver error text.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("email already registered")]
    Conflict,

    #[error("user row not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),
}

/// Top-level error for all account operations.
///
/// The grouping mirrors the HTTP mapping at the boundary: validation and
/// lookup failures answer 400, credential and token failures 401, and
/// infrastructure failures a detail-free 500.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Input validation errors (no store or crypto call was made)
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Weak password: {0}")]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    // Domain-level errors
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("User not found")]
    UserNotFound,

    // Authentication errors
    #[error("Wrong password")]
    WrongPassword,

    #[error("Invalid token")]
    InvalidToken(#[source] TokenError),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Hashing(#[source] PasswordError),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(#[source] TokenError),

    #[error("Store failure: {0}")]
    Store(String),
}

impl From<StoreError> for AccountError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => AccountError::DuplicateEmail,
            StoreError::NotFound => AccountError::UserNotFound,
            StoreError::Database(message) => AccountError::Store(message),
        }
    }
}
