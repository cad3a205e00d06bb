//! Fragment router for article detail views
//!
//! Maps `#article/<slug>` to a targeted lookup and owns the open/close
//! lifecycle of the detail view. Fragment changes arrive as notifications
//! on a [`FragmentChannel`]; nothing is polled.

mod fragment;

pub use fragment::{FragmentChannel, Route};

use crate::app::AppContext;
use crate::content::Article;
use crate::BlogError;
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::watch;

/// Detail view presentation state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailView {
    #[default]
    Closed,
    Open(Article),
}

impl DetailView {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn article(&self) -> Option<&Article> {
        match self {
            Self::Open(article) => Some(article),
            Self::Closed => None,
        }
    }
}

/// What handling one fragment did
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// The detail view now shows this article
    Opened(Article),
    /// An open detail view was closed
    Closed,
    /// The API has no article with this slug
    NotFound { slug: String },
    /// The lookup failed in transport
    Unavailable { slug: String, reason: String },
    /// Nothing to do
    Ignored,
}

/// Routes fragments to the detail view
pub struct Router {
    ctx: Arc<AppContext>,
    fragments: FragmentChannel,
    detail: DetailView,
}

impl Router {
    pub fn new(ctx: Arc<AppContext>, fragments: FragmentChannel) -> Self {
        Self {
            ctx,
            fragments,
            detail: DetailView::Closed,
        }
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    /// Fetches one article by slug, independent of any loaded listing
    pub async fn lookup(&self, slug: &str) -> Result<Article, BlogError> {
        match self.ctx.client().article_by_slug(slug).await? {
            Some(raw) => Ok(self.ctx.normalizer().normalize(&raw)),
            None => Err(BlogError::NotFound {
                slug: slug.to_string(),
            }),
        }
    }

    /// Applies one fragment value
    ///
    /// A failed lookup leaves the detail view closed. The failure is logged
    /// and returned but not rendered.
    pub async fn handle_fragment(&mut self, fragment: &str) -> RouteOutcome {
        match Route::parse(fragment) {
            Route::None => {
                if self.detail.is_open() {
                    tracing::debug!("Fragment cleared, closing detail view");
                    self.detail = DetailView::Closed;
                    RouteOutcome::Closed
                } else {
                    RouteOutcome::Ignored
                }
            }
            Route::Article(slug) => match self.lookup(&slug).await {
                Ok(article) => {
                    tracing::info!("Opening article '{}'", slug);
                    self.detail = DetailView::Open(article.clone());
                    RouteOutcome::Opened(article)
                }
                Err(BlogError::NotFound { slug }) => {
                    tracing::warn!("No article with slug '{}'", slug);
                    self.detail = DetailView::Closed;
                    RouteOutcome::NotFound { slug }
                }
                Err(e) => {
                    tracing::warn!("Error loading article '{}': {}", slug, e);
                    self.detail = DetailView::Closed;
                    RouteOutcome::Unavailable {
                        slug,
                        reason: e.to_string(),
                    }
                }
            },
        }
    }

    /// Closes the detail view and clears the fragment
    pub fn close(&mut self) {
        self.detail = DetailView::Closed;
        self.fragments.clear();
    }

    /// Reacts to fragment change notifications until `on_change` breaks or
    /// every sender is gone
    ///
    /// The fragment current at start-up is handled first, as on page load.
    pub async fn run<F>(&mut self, mut rx: watch::Receiver<String>, mut on_change: F)
    where
        F: FnMut(&RouteOutcome, &DetailView) -> ControlFlow<()>,
    {
        let initial = rx.borrow_and_update().clone();
        let outcome = self.handle_fragment(&initial).await;
        if on_change(&outcome, &self.detail).is_break() {
            return;
        }

        while rx.changed().await.is_ok() {
            let fragment = rx.borrow_and_update().clone();
            let outcome = self.handle_fragment(&fragment).await;
            if on_change(&outcome, &self.detail).is_break() {
                break;
            }
        }
    }
}
