use serde::{Deserialize, Serialize};

/// Relationship to an uploaded media document: a bare identifier at
/// `depth=0`, the expanded document at higher depths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    /// Bare identifier.
    Id(i64),
    /// Expanded media document.
    Doc(Box<Media>),
}

impl MediaRef {
    /// Public URL of the upload, when the reference was expanded.
    pub fn url(&self) -> Option<&str> {
        match self {
            MediaRef::Id(_) => None,
            MediaRef::Doc(doc) => doc.url.as_deref(),
        }
    }
}

/// Media document as served by the content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: i64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}
