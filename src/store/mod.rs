//! Store module for the blog listing view
//!
//! This module owns the view over the current result set.
//!
//! # Components
//!
//! - `QueryState`: page, filter, sort and search parameters of the listing
//! - `ArticleStore`: the load state machine, sorting, slicing and subscriptions
//! - `PaginationView`: page count, visible page window and prev/next enablement

mod article_store;
mod pagination;
mod query;

// Re-export main types
pub use crate::content::SortMode;
pub use article_store::{filter_fallback, sort_articles, ArticleStore, StoreSnapshot, StoreState};
pub use pagination::{PaginationView, WINDOW_RADIUS};
pub use query::QueryState;
