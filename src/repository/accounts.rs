//! Accounts repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{account::Account, person::Person},
};

#[derive(Clone)]
pub struct AccountsRepository {
    pool: Pool<Postgres>,
}

impl AccountsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a live account by username
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE username = $1 AND deleted_at IS NULL",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    /// Create a person and the account that logs in as them, atomically
    pub async fn create_with_person(
        &self,
        username: &str,
        password_hash: &str,
        full_name: &str,
    ) -> AppResult<Account> {
        let mut tx = self.pool.begin().await?;

        let person = sqlx::query_as::<_, Person>(
            "INSERT INTO persons (full_name) VALUES ($1) RETURNING *",
        )
        .bind(full_name)
        .fetch_one(&mut *tx)
        .await?;

        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (username, password_hash, person_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(person.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Username {} is already taken", username))
            }
            other => AppError::Database(other),
        })?;

        tx.commit().await?;
        Ok(account)
    }
}
