//! Book catalog service

use crate::{
    error::AppResult,
    models::book::{
        Book, BookChanges, BookFilter, BookResponse, CreateBook, NewBook, UpdateBook,
    },
    repository::{books::BooksRepository, EntityRepository},
};

#[derive(Clone)]
pub struct BooksService<R = BooksRepository> {
    repository: R,
}

impl<R> BooksService<R>
where
    R: EntityRepository<Record = Book, NewRecord = NewBook, Changes = BookChanges>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<BookResponse> {
        let book = NewBook::try_from(data)?;
        let created = self.repository.create(&book).await?;
        tracing::info!(book_id = created.id, "book created");
        Ok(created.into())
    }

    /// List live books with their publisher and author. The filter is not
    /// applied.
    pub async fn get_list(&self, _filter: &BookFilter) -> AppResult<Vec<BookResponse>> {
        let books = self.repository.get_list().await?;
        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<BookResponse> {
        Ok(self.repository.get_by_id(id).await?.into())
    }

    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<()> {
        let changes = BookChanges::try_from(data)?;
        self.repository.update(id, &changes).await?;
        tracing::info!(book_id = id, "book updated");
        Ok(())
    }

    /// Soft-delete a book. Looks the book up first so a missing book fails
    /// before the delete statement is issued.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.get_by_id(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }
}
