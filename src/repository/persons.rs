//! Persons repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::EntityRepository;
use crate::{
    error::{AppError, AppResult},
    models::person::{NewPerson, Person, PersonChanges},
};

#[derive(Clone)]
pub struct PersonsRepository {
    pool: Pool<Postgres>,
}

impl PersonsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn not_found(id: i64) -> AppError {
    tracing::debug!(person_id = id, "no live person row");
    AppError::NotFound(format!("Person {} not found", id))
}

#[async_trait]
impl EntityRepository for PersonsRepository {
    type Record = Person;
    type NewRecord = NewPerson;
    type Changes = PersonChanges;

    async fn create(&self, data: &NewPerson) -> AppResult<Person> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO persons (full_name, gender, birth_date)
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

    async fn get_list(&self) -> AppResult<Vec<Person>> {
        let rows = sqlx::query_as::<_, Person>(
            "SELECT * FROM persons WHERE deleted_at IS NULL ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Person> {
        sqlx::query_as::<_, Person>("SELECT * FROM persons WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn get_by_id_unscoped(&self, id: i64) -> AppResult<Person> {
        sqlx::query_as::<_, Person>("SELECT * FROM persons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: i64, data: &PersonChanges) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE persons
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
            "UPDATE persons SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
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
