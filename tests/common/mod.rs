//! Helpers for integration tests.

use std::sync::Mutex;

use async_trait::async_trait;

use clima_storefront::domain::category::{Category, CategoryLevel};
use clima_storefront::domain::inquiry::NewInquiry;
use clima_storefront::domain::product::Product;
use clima_storefront::repository::{
    CategoryListQuery, CategoryReader, InquiryWriter, ProductListQuery, ProductReader,
    RepositoryResult,
};

/// In-memory stand-in for the content API, mirroring its query semantics
/// closely enough for service-level tests.
#[derive(Default)]
pub struct InMemoryContentApi {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub inquiries: Mutex<Vec<NewInquiry>>,
}

impl InMemoryContentApi {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
            inquiries: Mutex::new(Vec::new()),
        }
    }

    pub fn stored_inquiries(&self) -> Vec<NewInquiry> {
        self.inquiries.lock().expect("inquiries lock").clone()
    }
}

#[async_trait]
impl CategoryReader for InMemoryContentApi {
    async fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>> {
        let mut docs: Vec<Category> = self
            .categories
            .iter()
            .filter(|category| query.level.is_none_or(|level| category.level == level))
            .cloned()
            .collect();
        if let Some(limit) = query.limit {
            docs.truncate(limit);
        }
        Ok(docs)
    }
}

#[async_trait]
impl ProductReader for InMemoryContentApi {
    async fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        let mut docs: Vec<Product> = self
            .products
            .iter()
            .filter(|product| {
                query
                    .category_slug
                    .as_deref()
                    .is_none_or(|slug| product.category_slug.as_deref() == Some(slug))
            })
            .filter(|product| query.featured.is_none_or(|featured| product.featured == featured))
            .cloned()
            .collect();
        if let Some(limit) = query.limit {
            docs.truncate(limit);
        }
        Ok(docs)
    }

    async fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>> {
        Ok(self
            .products
            .iter()
            .find(|product| product.slug == slug)
            .cloned())
    }
}

#[async_trait]
impl InquiryWriter for InMemoryContentApi {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepositoryResult<()> {
        self.inquiries
            .lock()
            .expect("inquiries lock")
            .push(inquiry.clone());
        Ok(())
    }
}

/// A small catalog resembling real content: two roots, a subcategory
/// tier, an orphaned category and products with sparse attributes.
pub fn seeded_api() -> InMemoryContentApi {
    let categories = vec![
        Category::new(1, "Climatizare", "climatizare", CategoryLevel::Root).with_order(1),
        Category::new(2, "Pompe de căldură", "pompe-caldura", CategoryLevel::Root).with_order(2),
        Category::new(3, "Split de perete", "split-perete", CategoryLevel::Sub)
            .with_parent_id(1)
            .with_description("Unități de perete pentru camere individuale."),
        Category::new(4, "Multi-split", "multi-split", CategoryLevel::Sub).with_parent_id(1),
        Category::new(5, "Seria Pearl", "seria-pearl", CategoryLevel::Series).with_parent_id(3),
        // Parent id 99 does not exist; the category must stay orphaned
        // without breaking anything.
        Category::new(6, "Accesorii", "accesorii", CategoryLevel::Sub).with_parent_id(99),
    ];

    let products = vec![
        Product::new(1, "Pearl 25", "pearl-25", "AS25PBAHRA")
            .with_category_slug("split-perete")
            .with_series("Pearl")
            .with_capacity("2.5 kW")
            .with_energy_class("A+++")
            .with_seer("8.5")
            .featured()
            .with_order(1),
        Product::new(2, "Pearl 35", "pearl-35", "AS35PBAHRA")
            .with_category_slug("split-perete")
            .with_series("Pearl")
            .with_capacity("3.5 kW")
            .with_energy_class("A++")
            .with_seer("7.0")
            .with_order(2),
        Product::new(3, "Flexis 35", "flexis-35", "AS35FBAHRA")
            .with_category_slug("split-perete")
            .with_series("Flexis")
            .with_capacity("3.5 kW")
            .with_energy_class("A+++")
            .with_seer("8.8")
            .featured(),
        Product::new(4, "Tide 50", "tide-50", "AS50TBAHRA")
            .with_category_slug("split-perete")
            .with_series("Tide")
            .with_capacity("5.0 kW")
            .with_energy_class("A+")
            .with_seer("6.1"),
        // No category at all; must render without category context.
        Product::new(5, "Stray 71", "stray-71", "AS71SBAHRA").with_capacity("7.1 kW"),
    ];

    InMemoryContentApi::new(categories, products)
}
