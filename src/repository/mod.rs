//! Repository layer for database operations
//!
//! Every domain table is soft-deleted: reads and writes only see rows whose
//! `deleted_at` is NULL, except the explicit `*_unscoped` reads.

pub mod accounts;
pub mod authors;
pub mod books;
pub mod borrowings;
pub mod persons;
pub mod publishers;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// CRUD contract shared by the entity repositories
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Full row as read back from storage
    type Record: Send;
    /// Fields supplied on insert
    type NewRecord: Send + Sync;
    /// Fields overwritten on update
    type Changes: Send + Sync;

    async fn create(&self, record: &Self::NewRecord) -> AppResult<Self::Record>;

    /// All live rows
    async fn get_list(&self) -> AppResult<Vec<Self::Record>>;

    /// Live row by id, `AppError::NotFound` if absent or soft-deleted
    async fn get_by_id(&self, id: i64) -> AppResult<Self::Record>;

    /// Row by id regardless of its deletion marker
    async fn get_by_id_unscoped(&self, id: i64) -> AppResult<Self::Record>;

    /// Overwrite the business fields of a live row and refresh `updated_at`
    async fn update(&self, id: i64, changes: &Self::Changes) -> AppResult<()>;

    /// Soft-delete a live row
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub accounts: accounts::AccountsRepository,
    pub persons: persons::PersonsRepository,
    pub publishers: publishers::PublishersRepository,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub borrowings: borrowings::BorrowingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            accounts: accounts::AccountsRepository::new(pool.clone()),
            persons: persons::PersonsRepository::new(pool.clone()),
            publishers: publishers::PublishersRepository::new(pool.clone()),
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            borrowings: borrowings::BorrowingsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
