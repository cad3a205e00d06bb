use serde::Deserialize;

/// Main configuration structure for the blog pipeline
///
/// Every section and key is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub blog: BlogConfig,
}

/// Content API location
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Hostname the site is served from, used to pick the API endpoint
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Explicit API base URL, bypassing hostname resolution
    #[serde(rename = "base-url", default)]
    pub base_url: Option<String>,
}

/// Listing and presentation behavior
#[derive(Debug, Clone, Deserialize)]
pub struct BlogConfig {
    /// Articles shown per listing page
    #[serde(rename = "page-size", default = "default_page_size")]
    pub page_size: u32,

    /// Articles shown in the homepage featured section
    #[serde(rename = "featured-limit", default = "default_featured_limit")]
    pub featured_limit: u32,

    /// Quiet period before a search keystroke burst triggers a query (milliseconds)
    #[serde(rename = "search-debounce-ms", default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Author shown when a record carries none
    #[serde(rename = "default-author", default = "default_author")]
    pub default_author: String,

    /// Image shown when a record carries none
    #[serde(rename = "placeholder-image", default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Whether the embedded fallback dataset replaces API results on failure
    #[serde(rename = "use-fallback", default = "default_use_fallback")]
    pub use_fallback: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            base_url: None,
        }
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            featured_limit: default_featured_limit(),
            search_debounce_ms: default_search_debounce_ms(),
            default_author: default_author(),
            placeholder_image: default_placeholder_image(),
            use_fallback: default_use_fallback(),
        }
    }
}

fn default_hostname() -> String {
    "localhost".to_string()
}

fn default_page_size() -> u32 {
    9
}

fn default_featured_limit() -> u32 {
    3
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_author() -> String {
    "Senior Java Engineer".to_string()
}

fn default_placeholder_image() -> String {
    "/images/blog/default-article.jpg".to_string()
}

fn default_use_fallback() -> bool {
    true
}
