//! Business logic services
//!
//! One service per entity. Services are built once at startup from the
//! shared [`Repository`] and handed to the HTTP layer through `AppState`.

pub mod accounts;
pub mod authors;
pub mod books;
pub mod borrowings;
pub mod persons;
pub mod publishers;

use crate::{config::AuthConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub accounts: accounts::AccountsService,
    pub persons: persons::PersonsService,
    pub publishers: publishers::PublishersService,
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub borrowings: borrowings::BorrowingsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            accounts: accounts::AccountsService::new(repository.accounts.clone(), auth_config),
            persons: persons::PersonsService::new(repository.persons.clone()),
            publishers: publishers::PublishersService::new(repository.publishers.clone()),
            authors: authors::AuthorsService::new(repository.authors.clone()),
            books: books::BooksService::new(repository.books.clone()),
            borrowings: borrowings::BorrowingsService::new(repository.borrowings.clone()),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
