use crate::config::{resolve_endpoint, Config};
use crate::content::{fallback_articles, Article, ArticleNormalizer, ContentClient};
use crate::BlogError;
use std::sync::Arc;

/// Everything the pages share, built once from a [`Config`]
///
/// Nothing here is global. Two contexts built from the same config are
/// equivalent and independent.
#[derive(Debug)]
pub struct AppContext {
    config: Config,
    client: ContentClient,
    normalizer: ArticleNormalizer,
    fallback: Vec<Article>,
}

impl AppContext {
    /// Builds the context
    ///
    /// The API base URL is the configured `base-url` when present, otherwise
    /// the endpoint resolved from the hostname. The fallback dataset is
    /// normalized up front, or left empty when fallback is disabled.
    ///
    /// # Errors
    ///
    /// * `BlogError::Transport` - The base URL is not a valid URL
    /// * `BlogError::Fallback` - The embedded dataset failed to parse
    pub fn init(config: Config) -> Result<Arc<Self>, BlogError> {
        let base_url = match &config.api.base_url {
            Some(url) => url.clone(),
            None => {
                let endpoint = resolve_endpoint(&config.api.hostname);
                tracing::debug!(
                    "Resolved hostname '{}' to {}",
                    config.api.hostname,
                    endpoint
                );
                endpoint.base_url().to_string()
            }
        };

        let client = ContentClient::new(&base_url)?;
        let normalizer = ArticleNormalizer::new(
            client.base_url(),
            config.blog.default_author.as_str(),
            config.blog.placeholder_image.as_str(),
        );

        let fallback = if config.blog.use_fallback {
            fallback_articles(&normalizer)?
        } else {
            Vec::new()
        };

        tracing::info!(
            "Content API: {} ({} fallback articles)",
            client.base_url(),
            fallback.len()
        );

        Ok(Arc::new(Self {
            config,
            client,
            normalizer,
            fallback,
        }))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &ContentClient {
        &self.client
    }

    pub fn normalizer(&self) -> &ArticleNormalizer {
        &self.normalizer
    }

    /// Normalized fallback articles, in dataset order
    pub fn fallback(&self) -> &[Article] {
        &self.fallback
    }

    pub fn has_fallback(&self) -> bool {
        !self.fallback.is_empty()
    }
}
