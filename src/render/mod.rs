//! Render module: turns pipeline state into display markup
//!
//! This module handles:
//! - Article cards, listing states and pagination controls
//! - The article detail view and its markdown body
//! - Generic notifications for failures no local handler covers

mod html;
mod markdown;
mod notification;

pub use html::{
    article_card, article_detail, document, empty_state, error_state, format_date,
    loading_state, render_cards, render_listing, render_pagination, unavailable_state,
    REVEAL_STAGGER_MS,
};
pub use markdown::markdown_to_html;
pub use notification::Notification;
