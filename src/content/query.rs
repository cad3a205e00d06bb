//! Query parameters for the content API

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Listing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recently published first
    #[default]
    Newest,
    /// Least recently published first
    Oldest,
    /// Featured first, then most recent
    Popular,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
        }
    }

    /// `sort[n]` values understood by the API
    fn api_sort_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Newest => &["publishedAt:desc"],
            Self::Oldest => &["publishedAt:asc"],
            Self::Popular => &["featured:desc", "publishedAt:desc"],
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "popular" => Ok(Self::Popular),
            other => Err(format!(
                "unknown sort mode '{}' (expected newest, oldest or popular)",
                other
            )),
        }
    }
}

/// One request's worth of filters, pagination and ordering
///
/// Empty strings in `search` and `tag` are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub featured_only: bool,
    pub limit: Option<u32>,
    pub sort: SortMode,
}

impl ArticleQuery {
    /// Featured articles only, at most `limit`
    pub fn featured(limit: u32) -> Self {
        Self {
            featured_only: true,
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// One page of the newest articles
    pub fn latest(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    /// Encodes the query as API parameters, in a stable order
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("populate".to_string(), "*".to_string())];

        for (i, field) in self.sort.api_sort_fields().iter().enumerate() {
            params.push((format!("sort[{}]", i), (*field).to_string()));
        }

        if let Some(search) = non_blank(&self.search) {
            for (i, field) in ["title", "excerpt", "content"].iter().enumerate() {
                params.push((
                    format!("filters[$or][{}][{}][$containsi]", i, field),
                    search.to_string(),
                ));
            }
        }

        if let Some(tag) = non_blank(&self.tag) {
            params.push(("filters[tags][$containsi]".to_string(), tag.to_string()));
        }

        if self.featured_only {
            params.push(("filters[featured][$eq]".to_string(), "true".to_string()));
        }

        if let Some(page) = self.page {
            params.push(("pagination[page]".to_string(), page.to_string()));
        }

        if let Some(page_size) = self.page_size {
            params.push(("pagination[pageSize]".to_string(), page_size.to_string()));
        }

        if let Some(limit) = self.limit {
            params.push(("pagination[limit]".to_string(), limit.to_string()));
        }

        params
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
