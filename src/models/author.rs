//! Author model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{enums::Gender, required};
use crate::error::{AppError, AppResult};

/// Full author row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub full_name: String,
    pub gender: Gender,
    pub birth_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Author fields written on insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub full_name: String,
    pub gender: Gender,
    pub birth_date: DateTime<Utc>,
}

/// Author fields overwritten on update
pub type AuthorChanges = NewAuthor;

/// Create author request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(length(min = 2, max = 56, message = "Full name must be 2-56 characters"))]
    pub full_name: String,
    pub gender: Option<Gender>,
    pub birth_date: Option<DateTime<Utc>>,
}

/// Update author request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[validate(length(min = 2, max = 56, message = "Full name must be 2-56 characters"))]
    pub full_name: String,
    pub gender: Option<Gender>,
    pub birth_date: Option<DateTime<Utc>>,
}

/// Author as returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i64,
    pub full_name: String,
    pub gender: Option<Gender>,
    pub birth_date: Option<DateTime<Utc>>,
}

/// Author reference embedded in joined book reads
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AuthorSummary {
    pub id: i64,
    pub full_name: String,
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

impl TryFrom<&CreateAuthor> for NewAuthor {
    type Error = AppError;

    fn try_from(data: &CreateAuthor) -> AppResult<Self> {
        Ok(Self {
            full_name: data.full_name.clone(),
            gender: required(data.gender, "gender")?,
            birth_date: required(data.birth_date, "birth_date")?,
        })
    }
}

impl TryFrom<&UpdateAuthor> for AuthorChanges {
    type Error = AppError;

    fn try_from(data: &UpdateAuthor) -> AppResult<Self> {
        Ok(Self {
            full_name: data.full_name.clone(),
            gender: required(data.gender, "gender")?,
            birth_date: required(data.birth_date, "birth_date")?,
        })
    }
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            full_name: author.full_name,
            gender: Some(author.gender),
            birth_date: Some(author.birth_date),
        }
    }
}
