//! Bibliotheca Library Server
//!
//! A REST JSON API over a PostgreSQL catalog of persons, publishers,
//! authors and books, and the borrowings that tie books to persons.
//! Every record is soft-deleted.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
