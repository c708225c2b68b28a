//! Publisher model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Publisher row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Publisher fields written on insert and overwritten on update
#[derive(Debug, Clone, PartialEq)]
pub struct NewPublisher {
    pub name: String,
    pub city: String,
}

pub type PublisherChanges = NewPublisher;

/// Create or update publisher request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PublisherRequest {
    #[validate(length(min = 2, max = 48, message = "Name must be 2-48 characters"))]
    pub name: String,
    #[validate(length(min = 2, max = 32, message = "City must be 2-32 characters"))]
    pub city: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublisherResponse {
    pub id: i64,
    pub name: String,
    pub city: String,
}

/// Publisher reference embedded in joined book reads
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PublisherSummary {
    pub id: i64,
    pub name: String,
    pub city: String,
}

impl From<&PublisherRequest> for NewPublisher {
    fn from(data: &PublisherRequest) -> Self {
        Self {
            name: data.name.clone(),
            city: data.city.clone(),
        }
    }
}

impl From<Publisher> for PublisherResponse {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name,
            city: publisher.city,
        }
    }
}
