use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::category::{Category, CategoryLevel};
use crate::domain::inquiry::NewInquiry;
use crate::domain::product::Product;

pub mod categories;
pub mod inquiries;
pub mod products;

#[cfg(test)]
pub mod mock;

/// Number of documents requested from the content API per listing call
/// when the query does not set its own limit.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Timeout applied to every content API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by repository implementations.
///
/// List and lookup reads over the content API fail soft (empty list,
/// `None`) instead of producing these, so the render path never sees a
/// read error; writes propagate them.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Transport-level failure talking to the content API.
    #[error("content api request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The content API answered with a non-success status.
    #[error("content api returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

/// Envelope wrapping every collection listing returned by the content API.
#[derive(Debug, Deserialize)]
struct DocsEnvelope<T> {
    docs: Vec<T>,
}

#[derive(Clone)]
/// Repository implementation backed by the external content API over HTTP.
pub struct HttpRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRepository {
    /// Create a repository targeting the content API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub(crate) fn collection_url(&self, collection: &str) -> String {
        format!("{}/api/{collection}", self.base_url)
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Fetches one collection listing, failing soft to an empty document
    /// list on transport errors, non-success statuses and undecodable
    /// bodies.
    pub(crate) async fn fetch_docs<T: DeserializeOwned>(
        &self,
        collection: &str,
        params: &[(&str, String)],
    ) -> Vec<T> {
        let url = self.collection_url(collection);
        let response = match self.client.get(&url).query(params).send().await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Content API request to /api/{collection} failed: {err}");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            log::warn!(
                "Content API returned {} for /api/{collection}",
                response.status()
            );
            return Vec::new();
        }

        match response.json::<DocsEnvelope<T>>().await {
            Ok(envelope) => envelope.docs,
            Err(err) => {
                log::warn!("Content API returned an undecodable body for /api/{collection}: {err}");
                Vec::new()
            }
        }
    }
}

/// Query definition used to list categories from the content API.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Optional hierarchy tier filter.
    pub level: Option<CategoryLevel>,
    /// Optional result cap; [`DEFAULT_LIST_LIMIT`] when unset.
    pub limit: Option<usize>,
}

impl CategoryListQuery {
    /// Construct a query covering every category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to one hierarchy tier.
    pub fn level(mut self, level: CategoryLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Cap the number of returned documents.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Query definition used to list products from the content API.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional owning-category filter, matched by slug.
    pub category_slug: Option<String>,
    /// Optional featured-flag filter.
    pub featured: Option<bool>,
    /// Optional result cap; [`DEFAULT_LIST_LIMIT`] when unset.
    pub limit: Option<usize>,
}

impl ProductListQuery {
    /// Construct a query covering every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to one category, by slug.
    pub fn category_slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Restrict the results by the featured flag.
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Cap the number of returned documents.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Read operations over category documents.
#[async_trait]
pub trait CategoryReader {
    /// All categories matching `query`, in the content API's display
    /// order. Fails soft to an empty list.
    async fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>>;
}

/// Read operations over product documents.
#[async_trait]
pub trait ProductReader {
    /// All products matching `query`, in the content API's display order.
    /// Fails soft to an empty list.
    async fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;

    /// Single product lookup by slug. Fails soft to `None`.
    async fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
}

/// Write operations for visitor inquiries.
#[async_trait]
pub trait InquiryWriter {
    /// Stores one inquiry document. Unlike reads, failures propagate so
    /// the caller can tell the visitor the submission did not go through.
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepositoryResult<()>;
}
