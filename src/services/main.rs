use crate::repository::{CategoryListQuery, CategoryReader, ProductListQuery, ProductReader};
use crate::services::products::{CategoryCardView, ProductCardView};
use crate::services::{NavCategory, ServiceResult, build_nav};

/// Number of featured products shown on the home page.
const FEATURED_LIMIT: usize = 10;

/// Data required to render the home page.
pub struct IndexPageData {
    pub nav: Vec<NavCategory>,
    pub featured: Vec<ProductCardView>,
    pub categories: Vec<CategoryCardView>,
}

/// Loads the home page: featured products and the root category grid.
pub async fn load_index_page<R>(repo: &R) -> ServiceResult<IndexPageData>
where
    R: CategoryReader + ProductReader + ?Sized,
{
    let featured = repo
        .list_products(ProductListQuery::new().featured(true).limit(FEATURED_LIMIT))
        .await?;
    let categories = repo.list_categories(CategoryListQuery::new()).await?;

    Ok(IndexPageData {
        nav: build_nav(&categories),
        featured: featured.iter().map(ProductCardView::from_product).collect(),
        categories: crate::catalog::tree::root_categories(&categories)
            .into_iter()
            .map(|root| CategoryCardView::from_category(root, &categories))
            .collect(),
    })
}
