//! HTTP client for the content API
//!
//! This module handles every request to the content API:
//! - Building the underlying HTTP client
//! - Encoding [`ArticleQuery`] values as API parameters
//! - Decoding the response envelope
//! - Classifying failures as [`TransportError`]
//!
//! Each call makes exactly one attempt. There is no retry, no backoff and no
//! request timeout; callers decide what a failure means.

use crate::content::article::{null_as_empty, ArticleEnvelope, RawArticle};
use crate::content::query::ArticleQuery;
use crate::{TransportError, TransportResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// Client for a Strapi-shaped content API
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: Client,
    base_url: String,
}

/// A tag record in either shape the API may return
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagRecord {
    Api { attributes: TagAttributes },
    Flat { name: String },
}

#[derive(Debug, Deserialize)]
struct TagAttributes {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TagEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    data: Vec<TagRecord>,
}

impl ContentClient {
    /// Creates a client for the API rooted at `base_url`
    ///
    /// Requests go to `{base_url}/api/...`; relative media paths are resolved
    /// against `base_url` itself.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use portfolio_blog::content::ContentClient;
    ///
    /// let client = ContentClient::new("http://localhost:1337").unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:1337");
    /// ```
    pub fn new(base_url: &str) -> TransportResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|source| TransportError::Http {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self { http, base_url })
    }

    /// Origin of the API, without the `/api` suffix
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists articles matching `query`
    pub async fn list_articles(&self, query: &ArticleQuery) -> TransportResult<ArticleEnvelope> {
        self.get("/articles", &query.to_params()).await
    }

    /// Lists featured articles, at most `limit`
    pub async fn featured_articles(&self, limit: u32) -> TransportResult<ArticleEnvelope> {
        self.list_articles(&ArticleQuery::featured(limit)).await
    }

    /// Lists one page of the newest articles
    pub async fn latest_articles(&self, page: u32, page_size: u32) -> TransportResult<ArticleEnvelope> {
        self.list_articles(&ArticleQuery::latest(page, page_size)).await
    }

    /// Looks up a single article by slug
    ///
    /// Returns `Ok(None)` when the API answers but has no such slug.
    pub async fn article_by_slug(&self, slug: &str) -> TransportResult<Option<RawArticle>> {
        let params = vec![
            ("filters[slug][$eq]".to_string(), slug.to_string()),
            ("populate".to_string(), "*".to_string()),
        ];
        let envelope: ArticleEnvelope = self.get("/articles", &params).await?;
        Ok(envelope.data.into_iter().next())
    }

    /// Lists tag names known to the API
    pub async fn list_tags(&self) -> TransportResult<Vec<String>> {
        let envelope: TagEnvelope = self.get("/tags", &[]).await?;
        Ok(envelope
            .data
            .into_iter()
            .map(|record| match record {
                TagRecord::Api { attributes, .. } => attributes.name,
                TagRecord::Flat { name } => name,
            })
            .collect())
    }

    /// Builds the request URL for an API path
    pub fn endpoint_url(&self, path: &str, params: &[(String, String)]) -> TransportResult<Url> {
        let raw = format!("{}/api{}", self.base_url, path);
        if params.is_empty() {
            Ok(Url::parse(&raw)?)
        } else {
            Ok(Url::parse_with_params(&raw, params)?)
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> TransportResult<T> {
        let url = self.endpoint_url(path, params)?;
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| TransportError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Content API returned {} for {}", status.as_u16(), url);
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| TransportError::Decode {
                url: url.to_string(),
                source,
            })
    }
}
