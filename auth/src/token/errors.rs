use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are explicit variants rather than exceptions so
/// callers can classify them without string matching.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature does not match")]
    SignatureMismatch,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}
