use async_trait::async_trait;

use crate::domain::inquiry::NewInquiry;
use crate::repository::{HttpRepository, InquiryWriter, RepositoryError, RepositoryResult};

#[async_trait]
impl InquiryWriter for HttpRepository {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepositoryResult<()> {
        let url = self.collection_url("inquiries");
        let response = self.client().post(&url).json(inquiry).send().await?;

        if !response.status().is_success() {
            return Err(RepositoryError::UnexpectedStatus(response.status()));
        }

        Ok(())
    }
}
