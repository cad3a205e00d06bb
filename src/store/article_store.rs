//! Listing store and its load state machine
//!
//! ```text
//! Idle ──▶ Loading ──▶ Loaded
//!   ▲         │    ├─▶ FallbackLoaded
//!   │         │    └─▶ Failed
//!   └─────────┴── any query change re-enters Loading
//! ```
//!
//! Every transition is published as a [`StoreSnapshot`] on a watch channel so
//! renderers react to state changes instead of being driven ad hoc.

use crate::content::{Article, SortMode};
use crate::store::pagination::PaginationView;
use crate::store::query::QueryState;
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;
use tokio::sync::watch;

/// Load state of the listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Results came from the content API
    Loaded,
    /// The API failed; results came from the fallback dataset
    FallbackLoaded,
    /// The API failed and no fallback data is configured
    Failed,
}

impl StoreState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::FallbackLoaded => "fallback_loaded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a renderer needs to draw the listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub state: StoreState,
    /// Articles on the current page
    pub page: Vec<Article>,
    /// Size of the whole sorted, filtered set
    pub total_count: usize,
    pub current_page: u32,
    pub page_size: u32,
    /// Reason for the last failure, when `state` is `Failed` or `FallbackLoaded`
    pub error: Option<String>,
}

impl StoreSnapshot {
    pub fn pagination(&self) -> PaginationView {
        PaginationView::compute(self.total_count, self.page_size, self.current_page)
    }
}

/// Holds the current result set and the view derived from it
#[derive(Debug)]
pub struct ArticleStore {
    state: StoreState,
    articles: Vec<Article>,
    error: Option<String>,
    page: u32,
    page_size: u32,
    tx: watch::Sender<StoreSnapshot>,
}

impl ArticleStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StoreSnapshot::default());
        Self {
            state: StoreState::Idle,
            articles: Vec::new(),
            error: None,
            page: 1,
            page_size: 1,
            tx,
        }
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Whole sorted, filtered result set
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Receives a snapshot after every transition
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.tx.subscribe()
    }

    /// Articles on the current page: `[(page-1)*page_size, page*page_size)`
    pub fn page_slice(&self) -> &[Article] {
        let size = self.page_size.max(1) as usize;
        let start = (self.page.max(1) as usize - 1).saturating_mul(size);
        if start >= self.articles.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(self.articles.len());
        &self.articles[start..end]
    }

    pub fn pagination(&self) -> PaginationView {
        PaginationView::compute(self.articles.len(), self.page_size, self.page)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            state: self.state,
            page: self.page_slice().to_vec(),
            total_count: self.articles.len(),
            current_page: self.page,
            page_size: self.page_size,
            error: self.error.clone(),
        }
    }

    /// Enters `Loading` for `query`, keeping the previous results until the
    /// load settles
    pub fn begin_loading(&mut self, query: &QueryState) {
        tracing::debug!("Store {} -> loading (page {})", self.state, query.page());
        self.state = StoreState::Loading;
        self.page = query.page();
        self.page_size = query.page_size();
        self.publish();
    }

    /// Settles with API results
    pub fn finish_loaded(&mut self, articles: Vec<Article>, query: &QueryState) {
        self.settle(StoreState::Loaded, articles, None, query);
    }

    /// Settles with fallback results, already filtered by [`filter_fallback`]
    pub fn finish_fallback(&mut self, articles: Vec<Article>, reason: String, query: &QueryState) {
        self.settle(StoreState::FallbackLoaded, articles, Some(reason), query);
    }

    /// Settles with nothing to show
    pub fn fail(&mut self, reason: String, query: &QueryState) {
        self.settle(StoreState::Failed, Vec::new(), Some(reason), query);
    }

    fn settle(
        &mut self,
        state: StoreState,
        mut articles: Vec<Article>,
        error: Option<String>,
        query: &QueryState,
    ) {
        sort_articles(&mut articles, query.sort_mode());
        tracing::debug!(
            "Store {} -> {} ({} articles)",
            self.state,
            state,
            articles.len()
        );
        self.state = state;
        self.articles = articles;
        self.error = error;
        self.page = query.page();
        self.page_size = query.page_size();
        self.publish();
    }

    fn publish(&self) {
        self.tx.send_replace(self.snapshot());
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts in place; stable, so ties keep input order
///
/// - `Newest`: `published_at` descending
/// - `Oldest`: `published_at` ascending
/// - `Popular`: featured first, then `published_at` descending
pub fn sort_articles(articles: &mut [Article], sort_mode: SortMode) {
    match sort_mode {
        SortMode::Newest => articles.sort_by_key(|a| Reverse(a.published_at)),
        SortMode::Oldest => articles.sort_by_key(|a| a.published_at),
        SortMode::Popular => articles.sort_by_key(|a| (Reverse(a.featured), Reverse(a.published_at))),
    }
}

/// Filters fallback data in-process
///
/// Search is a case-insensitive substring match against title, excerpt and
/// each tag. The tag filter requires exact membership. Content is not
/// searched, unlike the API.
pub fn filter_fallback(articles: &[Article], query: &QueryState) -> Vec<Article> {
    let needle = query.search_term().trim().to_lowercase();

    articles
        .iter()
        .filter(|article| {
            needle.is_empty()
                || article.title.to_lowercase().contains(&needle)
                || article.excerpt.to_lowercase().contains(&needle)
                || article
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .filter(|article| query.filter_tag().map_or(true, |tag| article.has_tag(tag)))
        .cloned()
        .collect()
}
