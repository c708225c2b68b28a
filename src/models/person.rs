//! Person (borrower) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::Gender;

/// Person row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub full_name: String,
    pub gender: Option<Gender>,
    pub birth_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Person fields written on insert and overwritten on update
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub full_name: String,
    pub gender: Option<Gender>,
    pub birth_date: Option<DateTime<Utc>>,
}

pub type PersonChanges = NewPerson;

/// Create or update person request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PersonRequest {
    #[validate(length(min = 2, max = 56, message = "Full name must be 2-56 characters"))]
    pub full_name: String,
    pub gender: Option<Gender>,
    pub birth_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonResponse {
    pub id: i64,
    pub full_name: String,
    pub gender: Option<Gender>,
    pub birth_date: Option<DateTime<Utc>>,
}

/// Person reference embedded in joined borrowing reads
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PersonSummary {
    pub id: i64,
    pub full_name: String,
}

impl From<&PersonRequest> for NewPerson {
    fn from(data: &PersonRequest) -> Self {
        Self {
            full_name: data.full_name.clone(),
            gender: data.gender,
            birth_date: data.birth_date,
        }
    }
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            full_name: person.full_name,
            gender: person.gender,
            birth_date: person.birth_date,
        }
    }
}
