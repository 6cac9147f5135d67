use async_trait::async_trait;

use crate::domain::category::Category;
use crate::repository::{
    CategoryListQuery, CategoryReader, DEFAULT_LIST_LIMIT, HttpRepository, RepositoryResult,
};

#[async_trait]
impl CategoryReader for HttpRepository {
    async fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>> {
        let mut params = vec![
            ("sort", "order".to_string()),
            ("depth", "0".to_string()),
            (
                "limit",
                query.limit.unwrap_or(DEFAULT_LIST_LIMIT).to_string(),
            ),
        ];

        if let Some(level) = query.level {
            params.push(("where[level][equals]", level.as_str().to_string()));
        }

        Ok(self.fetch_docs::<Category>("categories", &params).await)
    }
}
