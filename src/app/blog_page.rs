//! Blog listing page controller
//!
//! Owns the page's [`QueryState`] and [`ArticleStore`] and turns user events
//! into query changes and loads. Every effective change refetches; there is no
//! response cache.

use crate::app::{AppContext, Debouncer};
use crate::content::SortMode;
use crate::render::render_listing;
use crate::store::{filter_fallback, ArticleStore, QueryState, StoreSnapshot, StoreState};
use std::sync::Arc;
use tokio::sync::watch;

/// Something the reader did on the listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    /// Settled search input (already debounced)
    Search(String),
    /// Tag filter chosen, or cleared with `None`
    FilterTag(Option<String>),
    Sort(SortMode),
    GoToPage(u32),
    /// The retry action on the error affordance
    Retry,
}

/// The blog listing page
pub struct BlogPage {
    ctx: Arc<AppContext>,
    query: QueryState,
    store: ArticleStore,
}

impl BlogPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let query = QueryState::new(ctx.config().blog.page_size);
        Self {
            ctx,
            query,
            store: ArticleStore::new(),
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    /// Subscribes to store transitions
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.store.subscribe()
    }

    /// Fetches the listing for the current query and settles the store
    ///
    /// A transport failure settles on the filtered fallback dataset when one
    /// is available, otherwise on `Failed`. Returns the settled state.
    pub async fn load(&mut self) -> StoreState {
        self.store.begin_loading(&self.query);

        let request = self.query.to_article_query();
        match self.ctx.client().list_articles(&request).await {
            Ok(envelope) => {
                let articles = self.ctx.normalizer().normalize_all(&envelope.data);
                tracing::info!("Loaded {} articles from API", articles.len());
                self.store.finish_loaded(articles, &self.query);
            }
            Err(e) if self.ctx.has_fallback() => {
                tracing::warn!("API not available, using fallback articles: {}", e);
                let articles = filter_fallback(self.ctx.fallback(), &self.query);
                self.store.finish_fallback(articles, e.to_string(), &self.query);
            }
            Err(e) => {
                tracing::warn!("Error loading articles: {}", e);
                self.store.fail(e.to_string(), &self.query);
            }
        }

        self.store.state()
    }

    /// Applies one event to the query without loading
    ///
    /// Returns `false` for events that changed nothing, such as navigating
    /// to a page outside the current range. `Retry` always counts as a change.
    pub fn apply(&mut self, event: UserEvent) -> bool {
        match event {
            UserEvent::Search(term) => {
                if term.trim() == self.query.search_term().trim() {
                    return false;
                }
                self.query.set_search_term(term);
            }
            UserEvent::FilterTag(tag) => self.query.set_filter_tag(tag),
            UserEvent::Sort(sort_mode) => self.query.set_sort_mode(sort_mode),
            UserEvent::GoToPage(page) => {
                let total_pages = self.store.pagination().total_pages;
                if !self.query.go_to_page(page, total_pages) {
                    tracing::debug!("Ignoring page {} (of {})", page, total_pages);
                    return false;
                }
            }
            UserEvent::Retry => {}
        }
        true
    }

    /// Applies one event and reloads if it changed anything
    pub async fn handle(&mut self, event: UserEvent) -> bool {
        if !self.apply(event) {
            return false;
        }
        self.load().await;
        true
    }

    /// Markup for the current store snapshot
    pub fn render(&self) -> String {
        render_listing(&self.store.snapshot())
    }

    /// Runs settled search terms from `debouncer` through the page until its
    /// input is exhausted, handing each re-render to `on_render`
    pub async fn drive_search<F>(&mut self, debouncer: &mut Debouncer<String>, mut on_render: F)
    where
        F: FnMut(&str, &StoreSnapshot),
    {
        while let Some(term) = debouncer.next().await {
            tracing::debug!("Search settled on '{}'", term);
            if self.handle(UserEvent::Search(term)).await {
                on_render(&self.render(), &self.store.snapshot());
            }
        }
    }
}
