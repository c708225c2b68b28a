//! Author management service

use crate::{
    error::AppResult,
    models::author::{Author, AuthorChanges, AuthorResponse, CreateAuthor, NewAuthor, UpdateAuthor},
    repository::{authors::AuthorsRepository, EntityRepository},
};

#[derive(Clone)]
pub struct AuthorsService<R = AuthorsRepository> {
    repository: R,
}

impl<R> AuthorsService<R>
where
    R: EntityRepository<Record = Author, NewRecord = NewAuthor, Changes = AuthorChanges>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: &CreateAuthor) -> AppResult<AuthorResponse> {
        let author = NewAuthor::try_from(data)?;
        let created = self.repository.create(&author).await?;
        tracing::info!(author_id = created.id, "author created");
        Ok(created.into())
    }

    pub async fn get_list(&self) -> AppResult<Vec<AuthorResponse>> {
        let authors = self.repository.get_list().await?;
        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<AuthorResponse> {
        let author = self.repository.get_by_id(id).await?;
        Ok(author.into())
    }

    pub async fn update(&self, id: i64, data: &UpdateAuthor) -> AppResult<()> {
        let changes = AuthorChanges::try_from(data)?;
        self.repository.update(id, &changes).await?;
        tracing::info!(author_id = id, "author updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(author_id = id, "author deleted");
        Ok(())
    }
}
