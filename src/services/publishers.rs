//! Publisher management service

use crate::{
    error::AppResult,
    models::publisher::{
        NewPublisher, Publisher, PublisherChanges, PublisherRequest, PublisherResponse,
    },
    repository::{publishers::PublishersRepository, EntityRepository},
};

#[derive(Clone)]
pub struct PublishersService<R = PublishersRepository> {
    repository: R,
}

impl<R> PublishersService<R>
where
    R: EntityRepository<Record = Publisher, NewRecord = NewPublisher, Changes = PublisherChanges>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: &PublisherRequest) -> AppResult<PublisherResponse> {
        let created = self.repository.create(&NewPublisher::from(data)).await?;
        tracing::info!(publisher_id = created.id, "publisher created");
        Ok(created.into())
    }

    pub async fn get_list(&self) -> AppResult<Vec<PublisherResponse>> {
        let publishers = self.repository.get_list().await?;
        Ok(publishers.into_iter().map(PublisherResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<PublisherResponse> {
        Ok(self.repository.get_by_id(id).await?.into())
    }

    pub async fn update(&self, id: i64, data: &PublisherRequest) -> AppResult<()> {
        self.repository.update(id, &PublisherChanges::from(data)).await?;
        tracing::info!(publisher_id = id, "publisher updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(publisher_id = id, "publisher deleted");
        Ok(())
    }
}
