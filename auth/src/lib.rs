//! Authentication primitives for the credential backend.
//!
//! Provides the two pieces of crypto plumbing the account service builds on:
//! - Password hashing and verification (Argon2id, salted, fixed cost)
//! - Signed bearer token issue/verify (HS256)
//!
//! The crate knows nothing about users, stores, or HTTP; the service layer
//! owns that orchestration and injects the signing secret from configuration.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Correct-horse-9").unwrap();
//! assert!(hasher.verify("Correct-horse-9", &hash).unwrap());
//! assert!(!hasher.verify("wrong", &hash).unwrap());
//! ```
//!
//! ## Bearer tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let token = issuer.issue("user-42").unwrap();
//! assert_eq!(issuer.verify(&token).unwrap(), "user-42");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
