//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gender of a person or author, stored as the `gender` Postgres enum
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    M,
    F,
}
