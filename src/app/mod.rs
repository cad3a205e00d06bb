//! Application layer
//!
//! This module wires the pipeline together for the pages that show articles:
//! - The shared [`AppContext`] built once at startup
//! - The blog listing page and its user events
//! - The homepage featured section
//! - Debouncing of live search input

mod blog_page;
mod context;
mod debounce;
mod featured;

pub use blog_page::{BlogPage, UserEvent};
pub use context::AppContext;
pub use debounce::Debouncer;
pub use featured::{load_featured, FeaturedSection, FeaturedSource};
