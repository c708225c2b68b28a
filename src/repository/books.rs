//! Books repository
//!
//! Book reads always join the referenced publisher and author so callers
//! can display them without further queries.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::EntityRepository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookChanges, NewBook},
};

/// Columns expected by `Book::from_row`, selected from a relation aliased `b`
const JOINED_COLUMNS: &str = "b.*, p.name AS publisher_name, p.city AS publisher_city, \
     a.full_name AS author_full_name";

/// Joined rows that are soft-deleted come back as NULL snapshots
const JOINS: &str = "LEFT JOIN publishers p ON p.id = b.publisher_id AND p.deleted_at IS NULL \
     LEFT JOIN authors a ON a.id = b.author_id AND a.deleted_at IS NULL";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, id: i64, condition: &str) -> AppResult<Book> {
        let query = format!(
            "SELECT {} FROM books b {} WHERE b.id = $1 {}",
            JOINED_COLUMNS, JOINS, condition
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> AppError {
    tracing::debug!(book_id = id, "no live book row");
    AppError::NotFound(format!("Book {} not found", id))
}

#[async_trait]
impl EntityRepository for BooksRepository {
    type Record = Book;
    type NewRecord = NewBook;
    type Changes = BookChanges;

    async fn create(&self, data: &NewBook) -> AppResult<Book> {
        let query = format!(
            r#"
            WITH b AS (
                INSERT INTO books (title, subtitle, publisher_id, author_id)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT {} FROM b {}
            "#,
            JOINED_COLUMNS, JOINS
        );
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(&data.title)
            .bind(&data.subtitle)
            .bind(data.publisher_id)
            .bind(data.author_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_list(&self) -> AppResult<Vec<Book>> {
        let query = format!(
            "SELECT {} FROM books b {} WHERE b.deleted_at IS NULL ORDER BY b.id",
            JOINED_COLUMNS, JOINS
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.fetch_one_where(id, "AND b.deleted_at IS NULL").await
    }

    async fn get_by_id_unscoped(&self, id: i64) -> AppResult<Book> {
        self.fetch_one_where(id, "").await
    }

    async fn update(&self, id: i64, data: &BookChanges) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, subtitle = $2, publisher_id = $3, author_id = $4, updated_at = $5
            WHERE id = $6 AND deleted_at IS NULL
            "#,
        )
        .bind(&data.title)
        .bind(&data.subtitle)
        .bind(data.publisher_id)
        .bind(data.author_id)
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
            "UPDATE books SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
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
