//! Article types: the canonical record and the raw shapes it is built from

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque article identifier as issued by the content source
///
/// The API issues numeric ids; other sources may use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Canonical, normalized article
///
/// Built fresh by [`ArticleNormalizer`](crate::content::ArticleNormalizer) on
/// every fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub featured: bool,
    pub tags: Vec<String>,
    pub author: String,
    /// Estimated minutes to read, always >= 1
    pub read_time: u32,
    pub image: String,
}

impl Article {
    /// Fragment that routes to this article's detail view
    pub fn fragment(&self) -> String {
        format!("#article/{}", self.slug)
    }

    /// Returns true if any tag equals `tag` exactly
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A record as it arrives from either content source
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawArticle {
    /// API shape: `{ "id": .., "attributes": { .. } }`
    Api(ApiRecord),
    /// Flat shape used by the embedded fallback dataset
    Flat(FlatRecord),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecord {
    pub id: ArticleId,
    pub attributes: ApiAttributes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAttributes {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub published_at: DateTime<Utc>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub image: Option<ImageRelation>,
}

/// Nested media relation: `{ "data": { "attributes": { "url": .. } } }`
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRelation {
    pub data: Option<ImageData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    pub attributes: ImageAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageAttributes {
    pub url: String,
}

impl ImageRelation {
    /// Path or URL of the related media, if one is attached
    pub fn url(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.attributes.url.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRecord {
    pub id: ArticleId,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub published_at: DateTime<Utc>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub image: Option<String>,
}

/// Response envelope for collection queries
///
/// Records are decoded one at a time; a record that fits neither shape is
/// skipped and the rest are kept. Pagination metadata is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleEnvelope {
    #[serde(default, deserialize_with = "skip_malformed")]
    pub data: Vec<RawArticle>,
}

fn skip_malformed<'de, D>(deserializer: D) -> Result<Vec<RawArticle>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<serde_json::Value> = null_as_empty(deserializer)?;

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping malformed article record at index {}: {}", index, e);
                None
            }
        })
        .collect())
}

/// Accepts `null` wherever a sequence is expected
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
