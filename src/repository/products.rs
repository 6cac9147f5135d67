use async_trait::async_trait;

use crate::domain::product::Product;
use crate::repository::{
    DEFAULT_LIST_LIMIT, HttpRepository, ProductListQuery, ProductReader, RepositoryResult,
};

#[async_trait]
impl ProductReader for HttpRepository {
    async fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        let mut params = vec![
            ("sort", "order".to_string()),
            ("depth", "0".to_string()),
            (
                "limit",
                query.limit.unwrap_or(DEFAULT_LIST_LIMIT).to_string(),
            ),
        ];

        if let Some(slug) = &query.category_slug {
            params.push(("where[categorySlug][equals]", slug.clone()));
        }

        if let Some(featured) = query.featured {
            params.push(("where[featured][equals]", featured.to_string()));
        }

        Ok(self.fetch_docs::<Product>("products", &params).await)
    }

    async fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>> {
        let params = vec![
            ("where[slug][equals]", slug.to_string()),
            ("depth", "0".to_string()),
            ("limit", "1".to_string()),
        ];

        let mut docs = self.fetch_docs::<Product>("products", &params).await;
        if docs.is_empty() {
            Ok(None)
        } else {
            Ok(Some(docs.remove(0)))
        }
    }
}
