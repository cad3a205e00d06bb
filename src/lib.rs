//! Portfolio blog: the content pipeline behind a personal portfolio site
//!
//! This crate fetches articles from a headless content API, normalizes them,
//! falls back to an embedded dataset when the API is unreachable, and renders
//! filtered, sorted and paginated listings plus fragment-routed detail views.

pub mod app;
pub mod config;
pub mod content;
pub mod render;
pub mod router;
pub mod store;

use thiserror::Error;

/// Main error type for blog pipeline operations
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Article not found: {slug}")]
    NotFound { slug: String },

    #[error("Fallback dataset is malformed: {0}")]
    Fallback(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Failures talking to the content API
///
/// Every variant is recoverable at the call site: listings substitute the
/// fallback dataset, the router leaves the detail view closed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP error {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] ::url::ParseError),
}

/// Result type alias for blog pipeline operations
pub type Result<T> = std::result::Result<T, BlogError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for content API calls
pub type TransportResult<T> = std::result::Result<T, TransportError>;

// Re-export commonly used types
pub use app::{AppContext, BlogPage, UserEvent};
pub use config::Config;
pub use content::{Article, ArticleId, ArticleQuery, ContentClient};
pub use router::{Route, Router};
pub use store::{ArticleStore, PaginationView, QueryState, SortMode, StoreState};
