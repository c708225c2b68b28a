//! Data models for Bibliotheca
//!
//! Each entity module holds the storage row, the wire request/response
//! types, and the mapping between them.

pub mod account;
pub mod author;
pub mod book;
pub mod borrowing;
pub mod enums;
pub mod person;
pub mod publisher;

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use account::{Account, AccountClaims};
pub use author::Author;
pub use book::Book;
pub use borrowing::Borrowing;
pub use enums::Gender;
pub use person::Person;
pub use publisher::Publisher;

/// Unwrap a wire field that storage requires, failing with a validation
/// error instead of trusting upstream binding to have populated it.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}
