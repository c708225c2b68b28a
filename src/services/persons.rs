//! Person management service

use crate::{
    error::AppResult,
    models::person::{NewPerson, Person, PersonChanges, PersonRequest, PersonResponse},
    repository::{persons::PersonsRepository, EntityRepository},
};

#[derive(Clone)]
pub struct PersonsService<R = PersonsRepository> {
    repository: R,
}

impl<R> PersonsService<R>
where
    R: EntityRepository<Record = Person, NewRecord = NewPerson, Changes = PersonChanges>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: &PersonRequest) -> AppResult<PersonResponse> {
        let created = self.repository.create(&NewPerson::from(data)).await?;
        tracing::info!(person_id = created.id, "person created");
        Ok(created.into())
    }

    pub async fn get_list(&self) -> AppResult<Vec<PersonResponse>> {
        let persons = self.repository.get_list().await?;
        Ok(persons.into_iter().map(PersonResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<PersonResponse> {
        Ok(self.repository.get_by_id(id).await?.into())
    }

    pub async fn update(&self, id: i64, data: &PersonRequest) -> AppResult<()> {
        self.repository.update(id, &PersonChanges::from(data)).await?;
        tracing::info!(person_id = id, "person updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(person_id = id, "person deleted");
        Ok(())
    }
}
