use std::sync::Arc;
use tokio::sync::watch;

/// Name of the only route
const ARTICLE_ROUTE: &str = "article";

/// A parsed URL fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `#article/<slug>`
    Article(String),
    /// Empty, unknown, or missing its slug
    None,
}

impl Route {
    /// Parses a fragment, with or without its leading `#`
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_blog::router::Route;
    ///
    /// assert_eq!(
    ///     Route::parse("#article/database-performance"),
    ///     Route::Article("database-performance".to_string())
    /// );
    /// assert_eq!(Route::parse("#about"), Route::None);
    /// assert_eq!(Route::parse(""), Route::None);
    /// ```
    pub fn parse(fragment: &str) -> Self {
        let fragment = fragment.trim();
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

        let mut parts = fragment.split('/');
        match (parts.next(), parts.next()) {
            (Some(ARTICLE_ROUTE), Some(slug)) if !slug.is_empty() => Self::Article(slug.to_string()),
            _ => Self::None,
        }
    }
}

/// Source of fragment change notifications
///
/// Clones share one channel; every [`FragmentChannel::set`] notifies all
/// subscribers.
#[derive(Debug, Clone)]
pub struct FragmentChannel {
    tx: Arc<watch::Sender<String>>,
}

impl FragmentChannel {
    pub fn new(initial: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(initial.into());
        Self { tx: Arc::new(tx) }
    }

    pub fn set(&self, fragment: impl Into<String>) {
        self.tx.send_replace(fragment.into());
    }

    pub fn clear(&self) {
        self.set(String::new());
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for FragmentChannel {
    fn default() -> Self {
        Self::new(String::new())
    }
}
