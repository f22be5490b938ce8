use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::account::errors::StoreError;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::User;
use crate::domain::account::models::UserId;
use crate::domain::account::ports::UserStore;

/// Postgres-backed user store.
///
/// Ids are assigned here on insert. Email uniqueness rides on the
/// `users_email_key` constraint, so two concurrent registrations for the
/// same email resolve to exactly one created row and one `Conflict`.
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape, converted into the domain `User` on the way out.
#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        // Every stored email passed validation on the way in; a row that
        // fails it points at outside writes to the table.
        let email = EmailAddress::new(row.email)
            .map_err(|e| StoreError::Database(format!("stored email is invalid: {}", e)))?;

        Ok(User {
            id: UserId(row.id),
            email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn create_user(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let user = User {
            id: UserId::new(),
            email: email.clone(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return StoreError::Conflict;
                }
            }
            StoreError::Database(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        match row {
            Some(row) => row.try_into(),
            None => Err(StoreError::NotFound),
        }
    }

    async fn update_password_hash(&self, id: &UserId, new_hash: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(new_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
