use async_trait::async_trait;
use mockall::mock;

use super::{
    CategoryListQuery, CategoryReader, InquiryWriter, ProductListQuery, ProductReader,
    RepositoryResult,
};
use crate::domain::{category::Category, inquiry::NewInquiry, product::Product};

mock! {
    pub CategoryReader {}

    #[async_trait]
    impl CategoryReader for CategoryReader {
        async fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub ProductReader {}

    #[async_trait]
    impl ProductReader for ProductReader {
        async fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
        async fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
    }
}

mock! {
    pub InquiryWriter {}

    #[async_trait]
    impl InquiryWriter for InquiryWriter {
        async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepositoryResult<()>;
    }
}
