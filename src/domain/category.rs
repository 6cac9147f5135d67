use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::media::MediaRef;

/// Hierarchy tier assigned to a category by the content editors.
///
/// The tier is a label, not an enforced tree depth: a root category may or
/// may not have children, and nothing stops editors from attaching a
/// series-tier category directly to a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryLevel {
    /// Top navigation tier.
    #[serde(rename = "1")]
    Root,
    /// Subcategory tier.
    #[serde(rename = "2")]
    Sub,
    /// Series/range tier.
    #[serde(rename = "3")]
    Series,
}

impl CategoryLevel {
    /// Wire value used in content API query predicates.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryLevel::Root => "1",
            CategoryLevel::Sub => "2",
            CategoryLevel::Series => "3",
        }
    }
}

/// Relationship to another category as returned by the content API: a bare
/// identifier at `depth=0`, the expanded document at higher depths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    /// Bare identifier.
    Id(i64),
    /// Expanded category document.
    Doc(Box<Category>),
}

impl CategoryRef {
    /// Identifier carried by the reference, regardless of representation.
    pub fn id(&self) -> i64 {
        match self {
            CategoryRef::Id(id) => *id,
            CategoryRef::Doc(doc) => doc.id,
        }
    }
}

/// Category document as served by the content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL-safe identity used for routing; unique across categories.
    pub slug: String,
    /// Hierarchy tier label.
    pub level: CategoryLevel,
    /// Optional reference to the parent category. A reference that
    /// resolves to no known category is treated as "no parent".
    #[serde(default)]
    pub parent: Option<CategoryRef>,
    /// Optional description shown on the listing page.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional image relationship.
    #[serde(default)]
    pub image: Option<MediaRef>,
    /// Manual display order applied server-side by the content API.
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Build a category with the given identity and tier; remaining fields
    /// start empty.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        slug: impl Into<String>,
        level: CategoryLevel,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            level,
            parent: None,
            description: None,
            image: None,
            order: None,
            updated_at: None,
            created_at: None,
        }
    }

    /// Attach a parent reference by identifier.
    pub fn with_parent_id(mut self, parent_id: i64) -> Self {
        self.parent = Some(CategoryRef::Id(parent_id));
        self
    }

    /// Attach a descriptive text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a manual display order.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}
