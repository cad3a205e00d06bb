//! Content API endpoint resolution
//!
//! The site is served from one of three kinds of host, each paired with a
//! fixed API base URL.

use std::fmt;

/// API base URL for local development
pub const LOCAL_BASE_URL: &str = "http://localhost:1337";

/// Placeholder for static hosting where no API is deployed; requests fail
/// and the fallback dataset takes over
pub const HOSTED_BASE_URL: &str = "https://api-unavailable-using-fallback.local";

/// API base URL for production deployments
pub const PRODUCTION_BASE_URL: &str = "https://your-strapi-instance.railway.app";

/// Host classification driving endpoint selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `localhost` or `127.0.0.1`
    Local,
    /// Static hosting without a backend (`*.github.io`)
    HostedWithoutBackend,
    /// Any other host
    Production,
}

impl Endpoint {
    /// Returns the fixed base URL for this endpoint
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Local => LOCAL_BASE_URL,
            Self::HostedWithoutBackend => HOSTED_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_url())
    }
}

/// Classifies a hostname into one of the three endpoints
///
/// # Examples
///
/// ```
/// use portfolio_blog::config::{resolve_endpoint, Endpoint};
///
/// assert_eq!(resolve_endpoint("127.0.0.1"), Endpoint::Local);
/// assert_eq!(resolve_endpoint("jane.github.io"), Endpoint::HostedWithoutBackend);
/// assert_eq!(resolve_endpoint("jane.dev"), Endpoint::Production);
/// ```
pub fn resolve_endpoint(hostname: &str) -> Endpoint {
    let hostname = hostname.trim().to_ascii_lowercase();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        Endpoint::Local
    } else if hostname.contains("github.io") {
        Endpoint::HostedWithoutBackend
    } else {
        Endpoint::Production
    }
}
