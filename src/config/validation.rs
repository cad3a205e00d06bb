use crate::config::types::{ApiConfig, BlogConfig, Config};
use crate::ConfigError;
use url::Url;

const MAX_PAGE_SIZE: u32 = 100;
const MAX_DEBOUNCE_MS: u64 = 5_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)?;
    validate_blog_config(&config.blog)?;
    Ok(())
}

/// Validates the content API section
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    if config.hostname.trim().is_empty() {
        return Err(ConfigError::Validation(
            "hostname cannot be empty".to_string(),
        ));
    }

    if let Some(base_url) = &config.base_url {
        let url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "base-url '{}' must use http or https",
                base_url
            )));
        }
    }

    Ok(())
}

/// Validates listing and presentation settings
fn validate_blog_config(config: &BlogConfig) -> Result<(), ConfigError> {
    if config.page_size < 1 || config.page_size > MAX_PAGE_SIZE {
        return Err(ConfigError::Validation(format!(
            "page-size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, config.page_size
        )));
    }

    if config.featured_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "featured-limit must be >= 1, got {}",
            config.featured_limit
        )));
    }

    if config.search_debounce_ms > MAX_DEBOUNCE_MS {
        return Err(ConfigError::Validation(format!(
            "search-debounce-ms must be <= {}ms, got {}ms",
            MAX_DEBOUNCE_MS, config.search_debounce_ms
        )));
    }

    if config.default_author.trim().is_empty() {
        return Err(ConfigError::Validation(
            "default-author cannot be empty".to_string(),
        ));
    }

    if config.placeholder_image.trim().is_empty() {
        return Err(ConfigError::Validation(
            "placeholder-image cannot be empty".to_string(),
        ));
    }

    Ok(())
}
