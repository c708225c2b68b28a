//! Borrowings repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, FromRow, Pool, Postgres, Row};

use super::EntityRepository;
use crate::{
    error::{AppError, AppResult},
    models::{
        book::BookSummary,
        borrowing::{Borrowing, BorrowingChanges, NewBorrowing},
        person::PersonSummary,
    },
};

#[derive(Clone)]
pub struct BorrowingsRepository {
    pool: Pool<Postgres>,
}

impl BorrowingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn not_found(id: i64) -> AppError {
    tracing::debug!(borrowing_id = id, "no live borrowing row");
    AppError::NotFound(format!("Borrowing {} not found", id))
}

/// Build a borrowing from a row carrying `book_title` and
/// `person_full_name` join columns
fn borrowing_with_snapshots(row: &PgRow) -> Result<Borrowing, sqlx::Error> {
    let mut borrowing = Borrowing::from_row(row)?;
    borrowing.book = row
        .try_get::<Option<String>, _>("book_title")?
        .map(|title| BookSummary {
            id: borrowing.book_id,
            title,
        });
    borrowing.person = row
        .try_get::<Option<String>, _>("person_full_name")?
        .map(|full_name| PersonSummary {
            id: borrowing.person_id,
            full_name,
        });
    Ok(borrowing)
}

#[async_trait]
impl EntityRepository for BorrowingsRepository {
    type Record = Borrowing;
    type NewRecord = NewBorrowing;
    type Changes = BorrowingChanges;

    async fn create(&self, data: &NewBorrowing) -> AppResult<Borrowing> {
        let row = sqlx::query_as::<_, Borrowing>(
            r#"
            INSERT INTO borrowings (book_id, person_id, borrow_date, return_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(data.book_id)
        .bind(data.person_id)
        .bind(data.borrow_date)
        .bind(data.return_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_list(&self) -> AppResult<Vec<Borrowing>> {
        let rows = sqlx::query(
            r#"
            SELECT br.*, b.title AS book_title, p.full_name AS person_full_name
            FROM borrowings br
            LEFT JOIN books b ON b.id = br.book_id AND b.deleted_at IS NULL
            LEFT JOIN persons p ON p.id = br.person_id AND p.deleted_at IS NULL
            WHERE br.deleted_at IS NULL
            ORDER BY br.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let borrowings = rows
            .iter()
            .map(borrowing_with_snapshots)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(borrowings)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Borrowing> {
        sqlx::query_as::<_, Borrowing>(
            "SELECT * FROM borrowings WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn get_by_id_unscoped(&self, id: i64) -> AppResult<Borrowing> {
        sqlx::query_as::<_, Borrowing>("SELECT * FROM borrowings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: i64, data: &BorrowingChanges) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE borrowings
            SET return_date = $1, updated_at = $2
            WHERE id = $3 AND deleted_at IS NULL
            "#,
        )
        .bind(data.return_date)
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
            "UPDATE borrowings SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
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
