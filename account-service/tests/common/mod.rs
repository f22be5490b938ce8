use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use account_service::domain::account::errors::StoreError;
use account_service::domain::account::models::EmailAddress;
use account_service::domain::account::models::User;
use account_service::domain::account::models::UserId;
use account_service::domain::account::ports::UserStore;
use account_service::domain::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::TokenIssuer;
use chrono::Utc;

pub const TEST_TOKEN_SECRET: &[u8] = b"test-secret-key-for-token-signing-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

/// In-memory user store with the same contract as the Postgres adapter:
/// id assignment on create, at most one account per email. Lets the suite
/// exercise the full HTTP stack without a database.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let mut users = self.users.write().unwrap();

        if users.values().any(|user| user.email == *email) {
            return Err(StoreError::Conflict);
        }

        let user = User {
            id: UserId::new(),
            email: email.clone(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<User, StoreError> {
        let users = self.users.read().unwrap();
        users
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_password_hash(&self, id: &UserId, new_hash: &str) -> Result<(), StoreError> {
        let mut users = self.users.write().unwrap();
        match users.get_mut(id) {
            Some(user) => {
                user.password_hash = new_hash.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), StoreError> {
        let mut users = self.users.write().unwrap();
        match users.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}

/// Store whose every call fails the way a lost database connection does.
/// The detail string names a host that must never show up in a response
/// body.
pub struct FailingUserStore;

impl FailingUserStore {
    fn refused() -> StoreError {
        StoreError::Database("connection refused to db-host:5432".to_string())
    }
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn create_user(
        &self,
        _email: &EmailAddress,
        _password_hash: &str,
    ) -> Result<User, StoreError> {
        Err(Self::refused())
    }

    async fn find_user_by_email(&self, _email: &str) -> Result<User, StoreError> {
        Err(Self::refused())
    }

    async fn update_password_hash(&self, _id: &UserId, _new_hash: &str) -> Result<(), StoreError> {
        Err(Self::refused())
    }

    async fn delete_user(&self, _id: &UserId) -> Result<(), StoreError> {
        Err(Self::refused())
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryUserStore::default())).await
    }

    /// Spawn the application over a caller-chosen store implementation
    pub async fn spawn_with_store<S>(user_store: Arc<S>) -> Self
    where
        S: UserStore,
    {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_issuer = TokenIssuer::new(TEST_TOKEN_SECRET);
        let account_service = Arc::new(AccountService::new(user_store, token_issuer));

        let router = create_router(account_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
