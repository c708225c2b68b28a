//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{author::AuthorSummary, publisher::PublisherSummary, required};
use crate::error::{AppError, AppResult};

/// Book row, with the publisher and author it references when read
/// through a join
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub publisher_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub publisher: Option<PublisherSummary>,
    pub author: Option<AuthorSummary>,
}

/// Expects the `b.*` columns plus `publisher_name`, `publisher_city` and
/// `author_full_name`, which are NULL when the joined row is missing or
/// soft-deleted.
impl<'r> FromRow<'r, PgRow> for Book {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let publisher_id: i64 = row.try_get("publisher_id")?;
        let author_id: i64 = row.try_get("author_id")?;

        let publisher = match row.try_get::<Option<String>, _>("publisher_name")? {
            Some(name) => Some(PublisherSummary {
                id: publisher_id,
                name,
                city: row.try_get("publisher_city")?,
            }),
            None => None,
        };
        let author = row
            .try_get::<Option<String>, _>("author_full_name")?
            .map(|full_name| AuthorSummary {
                id: author_id,
                full_name,
            });

        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            subtitle: row.try_get("subtitle")?,
            publisher_id,
            author_id,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
            publisher,
            author,
        })
    }
}

/// Book fields written on insert and overwritten on update
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub subtitle: Option<String>,
    pub publisher_id: i64,
    pub author_id: i64,
}

pub type BookChanges = NewBook;

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 2, max = 56, message = "Title must be 2-56 characters"))]
    pub title: String,
    #[validate(length(min = 2, max = 64, message = "Subtitle must be 2-64 characters"))]
    pub subtitle: Option<String>,
    #[validate(required(message = "publisher_id is required"))]
    pub publisher_id: Option<i64>,
    #[validate(required(message = "author_id is required"))]
    pub author_id: Option<i64>,
}

/// Update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 2, max = 56, message = "Title must be 2-56 characters"))]
    pub title: String,
    #[validate(length(min = 2, max = 64, message = "Subtitle must be 2-64 characters"))]
    pub subtitle: Option<String>,
    #[validate(required(message = "publisher_id is required"))]
    pub publisher_id: Option<i64>,
    #[validate(required(message = "author_id is required"))]
    pub author_id: Option<i64>,
}

/// Book list query. Accepted for API compatibility; no filtering is applied.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookFilter {
    /// Free-text query, currently ignored
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub publisher_id: i64,
    pub author_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<PublisherSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorSummary>,
}

/// Book reference embedded in joined borrowing reads
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

impl TryFrom<&CreateBook> for NewBook {
    type Error = AppError;

    fn try_from(data: &CreateBook) -> AppResult<Self> {
        Ok(Self {
            title: data.title.clone(),
            subtitle: data.subtitle.clone(),
            publisher_id: required(data.publisher_id, "publisher_id")?,
            author_id: required(data.author_id, "author_id")?,
        })
    }
}

impl TryFrom<&UpdateBook> for BookChanges {
    type Error = AppError;

    fn try_from(data: &UpdateBook) -> AppResult<Self> {
        Ok(Self {
            title: data.title.clone(),
            subtitle: data.subtitle.clone(),
            publisher_id: required(data.publisher_id, "publisher_id")?,
            author_id: required(data.author_id, "author_id")?,
        })
    }
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            subtitle: book.subtitle,
            publisher_id: book.publisher_id,
            author_id: book.author_id,
            publisher: book.publisher,
            author: book.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_rejects_missing_foreign_keys() {
        let request = CreateBook {
            title: "Dune".to_string(),
            subtitle: None,
            publisher_id: None,
            author_id: Some(1),
        };
        let err = NewBook::try_from(&request).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("publisher_id")));
        assert!(request.validate().is_err());

        let update = UpdateBook {
            title: "Dune".to_string(),
            subtitle: None,
            publisher_id: Some(1),
            author_id: None,
        };
        let err = BookChanges::try_from(&update).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("author_id")));
    }

    #[test]
    fn test_inbound_copies_fields() {
        let request = CreateBook {
            title: "Dune".to_string(),
            subtitle: Some("Part one".to_string()),
            publisher_id: Some(4),
            author_id: Some(9),
        };
        assert!(request.validate().is_ok());
        assert_eq!(
            NewBook::try_from(&request).unwrap(),
            NewBook {
                title: "Dune".to_string(),
                subtitle: Some("Part one".to_string()),
                publisher_id: 4,
                author_id: 9,
            }
        );
    }

    #[test]
    fn test_outbound_keeps_joined_snapshots() {
        let now = Utc::now();
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            subtitle: None,
            publisher_id: 4,
            author_id: 9,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            publisher: Some(PublisherSummary {
                id: 4,
                name: "Chilton".to_string(),
                city: "Philadelphia".to_string(),
            }),
            author: None,
        };

        let json = serde_json::to_value(BookResponse::from(book)).unwrap();
        assert_eq!(json["publisher"]["name"], "Chilton");
        assert!(json.get("author").is_none());
        assert!(json["subtitle"].is_null());
    }
}
