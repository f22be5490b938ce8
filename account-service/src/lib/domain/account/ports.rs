use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::errors::StoreError;
use crate::account::models::EmailAddress;
use crate::account::models::User;
use crate::account::models::UserId;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account from raw credentials.
    ///
    /// # Arguments
    /// * `email` - Raw email string, shape-checked here
    /// * `password` - Raw password string, strength-checked here
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `InvalidEmail` - Email fails the shape rules
    /// * `WeakPassword` - Password fails the strength policy
    /// * `DuplicateEmail` - Email is already registered
    /// * `Hashing` / `Store` - Infrastructure failure
    async fn register(&self, email: &str, password: &str) -> Result<User, AccountError>;

    /// Authenticate an account and issue a bearer token for it.
    ///
    /// Read-only: nothing about the issued token is persisted.
    ///
    /// # Arguments
    /// * `email` - Email as typed by the caller, not shape-checked
    /// * `password` - Candidate password
    ///
    /// # Returns
    /// Signed bearer token carrying the user id
    ///
    /// # Errors
    /// * `MissingField` - Email or password is empty
    /// * `UserNotFound` - No account under this email
    /// * `WrongPassword` - Password does not match the stored hash
    /// * `Hashing` / `TokenIssuance` / `Store` - Infrastructure failure
    async fn login(&self, email: &str, password: &str) -> Result<String, AccountError>;

    /// Rotate the password of the account a token belongs to.
    ///
    /// The new password is strength-checked before the token is verified,
    /// so weak input is reported even alongside a bad token.
    ///
    /// # Arguments
    /// * `token` - Bearer token from a previous login
    /// * `new_password` - Replacement password, strength-checked here
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `WeakPassword` - New password fails the strength policy
    /// * `InvalidToken` - Token fails verification
    /// * `UserNotFound` - Account row no longer exists
    /// * `Hashing` / `Store` - Infrastructure failure
    async fn change_password(&self, token: &str, new_password: &str) -> Result<(), AccountError>;

    /// Delete the account a token belongs to. Terminal.
    ///
    /// # Arguments
    /// * `token` - Bearer token from a previous login
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `InvalidToken` - Token fails verification
    /// * `UserNotFound` - Account row no longer exists
    /// * `Store` - Infrastructure failure
    async fn delete_account(&self, token: &str) -> Result<(), AccountError>;
}

/// Persistence operations for the user aggregate.
///
/// The store owns id assignment and enforces at-most-one-account-per-email
/// atomically on insert; callers never pre-check for duplicates.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user and assign its id.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password_hash` - Salted hash of the password
    ///
    /// # Returns
    /// Created user entity with its assigned id
    ///
    /// # Errors
    /// * `Conflict` - Email is already registered
    /// * `Database` - Store operation failed
    async fn create_user(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<User, StoreError>;

    /// Retrieve the user registered under an email.
    ///
    /// Takes the raw string: login looks up whatever the caller typed
    /// without shape-checking it first, so an unregistered malformed email
    /// reports absence, not invalidity.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// User entity
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Database` - Store operation failed
    async fn find_user_by_email(&self, email: &str) -> Result<User, StoreError>;

    /// Replace a user's password hash.
    ///
    /// # Arguments
    /// * `id` - User ID to update
    /// * `new_hash` - Replacement salted hash
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Database` - Store operation failed
    async fn update_password_hash(&self, id: &UserId, new_hash: &str) -> Result<(), StoreError>;

    /// Remove a user from storage.
    ///
    /// # Arguments
    /// * `id` - User ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Database` - Store operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), StoreError>;
}
