//! Authors repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::EntityRepository;
use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorChanges, NewAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn not_found(id: i64) -> AppError {
    tracing::debug!(author_id = id, "no live author row");
    AppError::NotFound(format!("Author {} not found", id))
}

#[async_trait]
impl EntityRepository for AuthorsRepository {
    type Record = Author;
    type NewRecord = NewAuthor;
    type Changes = AuthorChanges;

    async fn create(&self, data: &NewAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (full_name, gender, birth_date)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(data.gender)
        .bind(data.birth_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE deleted_at IS NULL ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn get_by_id_unscoped(&self, id: i64) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: i64, data: &AuthorChanges) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET full_name = $1, gender = $2, birth_date = $3, updated_at = $4
            WHERE id = $5 AND deleted_at IS NULL
            "#,
        )
        .bind(&data.full_name)
        .bind(data.gender)
        .bind(data.birth_date)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE authors SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
