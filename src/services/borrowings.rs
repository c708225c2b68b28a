//! Borrowing management service

use crate::{
    error::AppResult,
    models::borrowing::{
        Borrowing, BorrowingChanges, BorrowingResponse, CreateBorrowing, NewBorrowing,
        UpdateBorrowing,
    },
    repository::{borrowings::BorrowingsRepository, EntityRepository},
};

#[derive(Clone)]
pub struct BorrowingsService<R = BorrowingsRepository> {
    repository: R,
}

impl<R> BorrowingsService<R>
where
    R: EntityRepository<Record = Borrowing, NewRecord = NewBorrowing, Changes = BorrowingChanges>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: &CreateBorrowing) -> AppResult<BorrowingResponse> {
        let borrowing = NewBorrowing::try_from(data)?;
        let created = self.repository.create(&borrowing).await?;
        tracing::info!(
            borrowing_id = created.id,
            book_id = created.book_id,
            person_id = created.person_id,
            "borrowing created"
        );
        Ok(created.into())
    }

    pub async fn get_list(&self) -> AppResult<Vec<BorrowingResponse>> {
        let borrowings = self.repository.get_list().await?;
        Ok(borrowings.into_iter().map(BorrowingResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<BorrowingResponse> {
        Ok(self.repository.get_by_id(id).await?.into())
    }

    /// Set or clear the return date
    pub async fn update(&self, id: i64, data: &UpdateBorrowing) -> AppResult<()> {
        self.repository
            .update(id, &BorrowingChanges::from(data))
            .await?;
        tracing::info!(borrowing_id = id, returned = data.return_date.is_some(), "borrowing updated");
        Ok(())
    }

    /// Soft-delete a borrowing after checking it exists
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.get_by_id(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(borrowing_id = id, "borrowing deleted");
        Ok(())
    }
}
