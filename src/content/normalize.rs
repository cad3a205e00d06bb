//! Record normalization
//!
//! Maps either raw record shape onto [`Article`], filling defaults and
//! deriving the read-time estimate.

use crate::content::article::{Article, RawArticle};

/// Reading speed used for read-time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Counts maximal runs of non-whitespace characters
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Estimated reading time in whole minutes, never less than one
///
/// # Examples
///
/// ```
/// use portfolio_blog::content::read_time;
///
/// assert_eq!(read_time(""), 1);
/// assert_eq!(read_time(&"word ".repeat(201)), 2);
/// ```
pub fn read_time(content: &str) -> u32 {
    let minutes = word_count(content).div_ceil(WORDS_PER_MINUTE);
    u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
}

/// Builds canonical articles from raw records
#[derive(Debug, Clone)]
pub struct ArticleNormalizer {
    asset_base: String,
    default_author: String,
    placeholder_image: String,
}

impl ArticleNormalizer {
    /// Creates a normalizer
    ///
    /// # Arguments
    ///
    /// * `asset_base` - Origin that relative media paths from the API are joined onto
    /// * `default_author` - Author used when a record has none
    /// * `placeholder_image` - Image used when a record has none
    pub fn new(
        asset_base: impl Into<String>,
        default_author: impl Into<String>,
        placeholder_image: impl Into<String>,
    ) -> Self {
        Self {
            asset_base: asset_base.into().trim_end_matches('/').to_string(),
            default_author: default_author.into(),
            placeholder_image: placeholder_image.into(),
        }
    }

    /// Maps one raw record to an [`Article`]
    pub fn normalize(&self, raw: &RawArticle) -> Article {
        match raw {
            RawArticle::Api(record) => {
                let attrs = &record.attributes;
                let content = attrs.content.clone().unwrap_or_default();
                Article {
                    id: record.id.clone(),
                    title: attrs.title.clone(),
                    slug: attrs.slug.clone(),
                    excerpt: attrs.excerpt.clone().unwrap_or_default(),
                    read_time: read_time(&content),
                    content,
                    published_at: attrs.published_at,
                    featured: attrs.featured.unwrap_or(false),
                    tags: attrs.tags.clone().unwrap_or_default(),
                    author: self.author_or_default(attrs.author.as_deref()),
                    image: attrs
                        .image
                        .as_ref()
                        .and_then(|image| image.url())
                        .map(|url| self.asset_url(url))
                        .unwrap_or_else(|| self.placeholder_image.clone()),
                }
            }
            RawArticle::Flat(record) => {
                let content = record.content.clone().unwrap_or_default();
                Article {
                    id: record.id.clone(),
                    title: record.title.clone(),
                    slug: record.slug.clone(),
                    excerpt: record.excerpt.clone().unwrap_or_default(),
                    read_time: read_time(&content),
                    content,
                    published_at: record.published_at,
                    featured: record.featured.unwrap_or(false),
                    tags: record.tags.clone().unwrap_or_default(),
                    author: self.author_or_default(record.author.as_deref()),
                    image: record
                        .image
                        .as_deref()
                        .filter(|url| !url.trim().is_empty())
                        .map(str::to_string)
                        .unwrap_or_else(|| self.placeholder_image.clone()),
                }
            }
        }
    }

    /// Maps every record, preserving order
    pub fn normalize_all(&self, raws: &[RawArticle]) -> Vec<Article> {
        raws.iter().map(|raw| self.normalize(raw)).collect()
    }

    fn author_or_default(&self, author: Option<&str>) -> String {
        author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(&self.default_author)
            .to_string()
    }

    fn asset_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.asset_base, url)
        } else {
            format!("{}/{}", self.asset_base, url)
        }
    }
}
