//! Publishers repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::EntityRepository;
use crate::{
    error::{AppError, AppResult},
    models::publisher::{NewPublisher, Publisher, PublisherChanges},
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn not_found(id: i64) -> AppError {
    tracing::debug!(publisher_id = id, "no live publisher row");
    AppError::NotFound(format!("Publisher {} not found", id))
}

#[async_trait]
impl EntityRepository for PublishersRepository {
    type Record = Publisher;
    type NewRecord = NewPublisher;
    type Changes = PublisherChanges;

    async fn create(&self, data: &NewPublisher) -> AppResult<Publisher> {
        let row = sqlx::query_as::<_, Publisher>(
            "INSERT INTO publishers (name, city) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.city)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_list(&self) -> AppResult<Vec<Publisher>> {
        let rows = sqlx::query_as::<_, Publisher>(
            "SELECT * FROM publishers WHERE deleted_at IS NULL ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            "SELECT * FROM publishers WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn get_by_id_unscoped(&self, id: i64) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: i64, data: &PublisherChanges) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE publishers
            SET name = $1, city = $2, updated_at = $3
            WHERE id = $4 AND deleted_at IS NULL
            "#,
        )
        .bind(&data.name)
        .bind(&data.city)
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
            "UPDATE publishers SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
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
