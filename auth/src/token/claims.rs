use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an issued token.
///
/// The subject is the only claim written at issuance. `exp` is kept in the
/// schema so a token carrying one is still readable and gets rejected as
/// expired during verification, but this service never sets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id the token proves possession of.
    pub sub: String,

    /// Expiration time (Unix timestamp). Absent on tokens issued here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Create claims for a subject, with no expiry.
    pub fn for_subject(subject: impl Into<String>) -> Self {
        Self {
            sub: subject.into(),
            exp: None,
        }
    }
}
