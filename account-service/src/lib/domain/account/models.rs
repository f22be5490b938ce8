use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::account::errors::EmailError;
use crate::account::errors::PasswordPolicyError;
use crate::account::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered account. Only the salted password hash is
/// carried; the plaintext never reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed UserId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type
///
/// The login identifier. Accepted iff the string has the shape
/// `local@domain.tld`: no whitespace anywhere, exactly one `@`, a
/// non-empty part before the `@`, and at least one `.` after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// First shape rule the input breaks, checked in the order
    /// whitespace, `@` count, local part, domain dot.
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.chars().any(char::is_whitespace) {
            return Err(EmailError::ContainsWhitespace);
        }
        let (local, domain) = email.split_once('@').ok_or(EmailError::MissingAtSign)?;
        if domain.contains('@') {
            return Err(EmailError::MultipleAtSigns);
        }
        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }
        if !domain.contains('.') {
            return Err(EmailError::MissingDomainDot);
        }
        Ok(Self(email))
    }

    /// Get email as string slice.
    ///
    /// # Returns
    /// Email string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Password value type
///
/// Holds a plaintext that passed the strength policy, on its way to the
/// hasher and nowhere else. Strong means: at least 8 characters, at least
/// one ASCII uppercase letter, and at least one character that is neither
/// a letter nor a digit.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    const MIN_CHARS: usize = 8;
    // Hard input cap of bcrypt-family algorithms; over-long input is
    // rejected rather than silently truncated.
    const MAX_BYTES: usize = 72;

    /// Create a new strength-checked password.
    ///
    /// # Arguments
    /// * `password` - Raw password string
    ///
    /// # Returns
    /// Validated Password value object
    ///
    /// # Errors
    /// First strength rule the input breaks, checked in the order
    /// length, byte cap, uppercase, special character.
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let chars = password.chars().count();
        if chars < Self::MIN_CHARS {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_CHARS,
                actual: chars,
            });
        }
        if password.len() > Self::MAX_BYTES {
            return Err(PasswordPolicyError::TooLong {
                max: Self::MAX_BYTES,
                actual: password.len(),
            });
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if password.chars().all(char::is_alphanumeric) {
            return Err(PasswordPolicyError::MissingSpecialChar);
        }
        Ok(Self(password))
    }

    /// Get the plaintext for hashing.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The plaintext must never appear in logs, not even through `{:?}`.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
