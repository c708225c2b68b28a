//! Borrowing model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{book::BookSummary, person::PersonSummary, required};
use crate::error::{AppError, AppResult};

/// Borrowing row. `book` and `person` are only filled by list reads,
/// which join the referenced rows.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Borrowing {
    pub id: i64,
    pub book_id: i64,
    pub person_id: i64,
    pub borrow_date: DateTime<Utc>,
    /// `None` while the book has not been returned
    pub return_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[sqlx(skip)]
    pub book: Option<BookSummary>,
    #[sqlx(skip)]
    pub person: Option<PersonSummary>,
}

/// Borrowing fields written on insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewBorrowing {
    pub book_id: i64,
    pub person_id: i64,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

/// Borrowing fields overwritten on update
#[derive(Debug, Clone, PartialEq)]
pub struct BorrowingChanges {
    pub return_date: Option<DateTime<Utc>>,
}

/// Create borrowing request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBorrowing {
    #[validate(required(message = "book_id is required"))]
    pub book_id: Option<i64>,
    #[validate(required(message = "person_id is required"))]
    pub person_id: Option<i64>,
    #[validate(required(message = "borrow_date is required"))]
    pub borrow_date: Option<DateTime<Utc>>,
    pub return_date: Option<DateTime<Utc>>,
}

/// Update borrowing request. A missing or null `return_date` marks the
/// book as not returned.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBorrowing {
    pub return_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowingResponse {
    pub id: i64,
    pub book_id: i64,
    pub person_id: i64,
    pub borrow_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<BookSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<PersonSummary>,
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

impl TryFrom<&CreateBorrowing> for NewBorrowing {
    type Error = AppError;

    fn try_from(data: &CreateBorrowing) -> AppResult<Self> {
        Ok(Self {
            book_id: required(data.book_id, "book_id")?,
            person_id: required(data.person_id, "person_id")?,
            borrow_date: required(data.borrow_date, "borrow_date")?,
            return_date: data.return_date,
        })
    }
}

impl From<&UpdateBorrowing> for BorrowingChanges {
    fn from(data: &UpdateBorrowing) -> Self {
        Self {
            return_date: data.return_date,
        }
    }
}

impl From<Borrowing> for BorrowingResponse {
    fn from(borrowing: Borrowing) -> Self {
        Self {
            id: borrowing.id,
            book_id: borrowing.book_id,
            person_id: borrowing.person_id,
            borrow_date: borrowing.borrow_date,
            return_date: borrowing.return_date,
            book: borrowing.book,
            person: borrowing.person,
        }
    }
}
