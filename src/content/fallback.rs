//! Embedded fallback dataset, served when the content API is unreachable

use crate::content::article::{Article, RawArticle};
use crate::content::normalize::ArticleNormalizer;

/// Raw JSON of the fallback dataset, compiled into the binary
pub const FALLBACK_JSON: &str = include_str!("fallback.json");

/// Parses the embedded dataset into raw records
pub fn fallback_records() -> Result<Vec<RawArticle>, serde_json::Error> {
    serde_json::from_str(FALLBACK_JSON)
}

/// Parses and normalizes the embedded dataset
pub fn fallback_articles(normalizer: &ArticleNormalizer) -> Result<Vec<Article>, serde_json::Error> {
    Ok(normalizer.normalize_all(&fallback_records()?))
}
