use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenError;
use auth::TokenIssuer;

use crate::account::errors::AccountError;
use crate::account::models::EmailAddress;
use crate::account::models::Password;
use crate::account::models::User;
use crate::account::models::UserId;
use crate::account::ports::AccountServicePort;
use crate::account::ports::UserStore;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
/// Holds no mutable state: the store handle, the hasher, and the signing
/// secret are fixed at startup and shared read-only across requests.
pub struct AccountService<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl<S> AccountService<S>
where
    S: UserStore,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `token_issuer` - Token signing and verification, built from the
    ///   configured secret
    ///
    /// # Returns
    /// Configured account service instance
    pub fn new(store: Arc<S>, token_issuer: TokenIssuer) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    /// Verify a bearer token and extract the user id it carries.
    ///
    /// A token whose subject is not a well-formed user id counts as
    /// invalid, same as a bad signature.
    fn verify_token(&self, token: &str) -> Result<UserId, AccountError> {
        let subject = self
            .token_issuer
            .verify(token)
            .map_err(AccountError::InvalidToken)?;

        UserId::from_string(&subject).map_err(|_| {
            AccountError::InvalidToken(TokenError::Malformed(
                "subject is not a valid user id".to_string(),
            ))
        })
    }
}

#[async_trait]
impl<S> AccountServicePort for AccountService<S>
where
    S: UserStore,
{
    async fn register(&self, email: &str, password: &str) -> Result<User, AccountError> {
        // Email shape first, then password strength. On any validation
        // failure no store or crypto call is made.
        let email = EmailAddress::new(email.to_string())?;
        let password = Password::new(password.to_string())?;

        let password_hash = self
            .password_hasher
            .hash(password.as_str())
            .map_err(AccountError::Hashing)?;

        let user = self.store.create_user(&email, &password_hash).await?;

        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, AccountError> {
        if email.is_empty() {
            return Err(AccountError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AccountError::MissingField("password"));
        }

        // Login takes the email as typed. A malformed address simply has
        // no account under it and reports as not found.
        let user = self.store.find_user_by_email(email).await?;

        let matches = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(AccountError::Hashing)?;
        if !matches {
            return Err(AccountError::WrongPassword);
        }

        self.token_issuer
            .issue(&user.id.to_string())
            .map_err(AccountError::TokenIssuance)
    }

    async fn change_password(&self, token: &str, new_password: &str) -> Result<(), AccountError> {
        // Strength before token verification, so weak input is reported
        // without revealing whether the token would have verified.
        let new_password = Password::new(new_password.to_string())?;
        let user_id = self.verify_token(token)?;

        let new_hash = self
            .password_hasher
            .hash(new_password.as_str())
            .map_err(AccountError::Hashing)?;

        self.store.update_password_hash(&user_id, &new_hash).await?;

        Ok(())
    }

    async fn delete_account(&self, token: &str) -> Result<(), AccountError> {
        let user_id = self.verify_token(token)?;

        // The token itself stays signature-valid after this: tokens are
        // stateless and there is no revocation list. Every later operation
        // that needs the row fails with UserNotFound instead.
        self.store.delete_user(&user_id).await?;

        Ok(())
    }
}
