use serde::Serialize;
use thiserror::Error;

use crate::catalog::tree;
use crate::domain::category::Category;
use crate::repository::RepositoryError;

pub mod inquiries;
pub mod main;
pub mod products;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer to the route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested document does not exist.
    #[error("not found")]
    NotFound,
    /// A submitted form failed validation.
    #[error("{0}")]
    Form(String),
    /// Failure propagated from the repository layer.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Navigation entry for the site header: a root category with its direct
/// children.
#[derive(Debug, Serialize)]
pub struct NavCategory {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub children: Vec<NavLink>,
}

/// Plain link to a category listing page.
#[derive(Debug, Serialize)]
pub struct NavLink {
    pub name: String,
    pub slug: String,
    pub url: String,
}

impl NavLink {
    pub(crate) fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            url: format!("/products/{}", category.slug),
        }
    }
}

/// Builds the header navigation from the flat category list. Orphaned
/// categories (dangling parent references) simply appear under no root.
pub fn build_nav(categories: &[Category]) -> Vec<NavCategory> {
    tree::root_categories(categories)
        .into_iter()
        .map(|root| NavCategory {
            name: root.name.clone(),
            slug: root.slug.clone(),
            url: format!("/products/{}", root.slug),
            children: tree::children_of(categories, root.id)
                .into_iter()
                .map(NavLink::from_category)
                .collect(),
        })
        .collect()
}
