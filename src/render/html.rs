//! HTML markup for listings, pagination and the article detail view

use crate::content::Article;
use crate::render::markdown::markdown_to_html;
use crate::store::{PaginationView, StoreSnapshot, StoreState};
use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Delay between consecutive card reveals (milliseconds)
pub const REVEAL_STAGGER_MS: usize = 100;

/// Formats a publication date as `March 15, 2024`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Renders the listing for a store snapshot
///
/// Loading, empty and error outcomes each get their own affordance; an empty
/// result set is never shown as an error and vice versa.
pub fn render_listing(snapshot: &StoreSnapshot) -> String {
    match snapshot.state {
        StoreState::Idle => String::new(),
        StoreState::Loading => loading_state(),
        StoreState::Failed => error_state(),
        StoreState::Loaded | StoreState::FallbackLoaded => {
            let mut html = String::new();
            if snapshot.state == StoreState::FallbackLoaded {
                html.push_str(offline_notice());
            }
            if snapshot.page.is_empty() {
                html.push_str(&empty_state());
            } else {
                html.push_str(&render_cards(&snapshot.page));
            }
            html.push_str(&render_pagination(&snapshot.pagination()));
            html
        }
    }
}

/// Renders a grid of article cards with staggered reveal hooks
pub fn render_cards(articles: &[Article]) -> String {
    let cards: String = articles
        .iter()
        .enumerate()
        .map(|(index, article)| article_card(article, index))
        .collect();
    format!(r#"<div class="articles-grid">{}</div>"#, cards)
}

/// Renders one article card
///
/// `index` is the card's position in the grid and sets its reveal delay.
pub fn article_card(article: &Article, index: usize) -> String {
    let title = encode_text(&article.title);
    let href = encode_double_quoted_attribute(&article.fragment()).into_owned();
    let featured = if article.featured {
        r#"<div class="featured-badge">Featured</div>"#
    } else {
        ""
    };

    format!(
        concat!(
            r#"<article class="blog-card animate-on-scroll" data-article-id="{id}" data-reveal-delay="{delay}">"#,
            r#"<div class="blog-image"><img src="{image}" alt="{alt}" loading="lazy">{featured}</div>"#,
            r#"<div class="blog-content">"#,
            r#"<div class="blog-meta"><span class="blog-date">{date}</span><span class="blog-read-time">{read_time} min read</span></div>"#,
            r#"<h3 class="blog-title"><a href="{href}" class="article-link">{title}</a></h3>"#,
            r#"<p class="blog-excerpt">{excerpt}</p>"#,
            r#"<div class="blog-tags">{tags}</div>"#,
            r#"<div class="blog-footer"><a href="{href}" class="blog-link">Read More <i class="fas fa-arrow-right"></i></a></div>"#,
            r#"</div></article>"#
        ),
        id = encode_double_quoted_attribute(&article.id.to_string()),
        delay = index * REVEAL_STAGGER_MS,
        image = encode_double_quoted_attribute(&article.image),
        alt = encode_double_quoted_attribute(&article.title),
        featured = featured,
        date = format_date(&article.published_at),
        read_time = article.read_time,
        href = href,
        title = title,
        excerpt = encode_text(&article.excerpt),
        tags = render_tags(&article.tags),
    )
}

fn render_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, encode_text(tag)))
        .collect()
}

/// Renders the pagination control, or nothing when there is a single page
///
/// Disabled previous/next links carry no target page.
pub fn render_pagination(view: &PaginationView) -> String {
    if !view.is_visible() {
        return String::new();
    }

    let mut html = String::from(r#"<ul class="pagination">"#);
    html.push_str(&step_link(
        view.prev_page(),
        r#"<i class="fas fa-chevron-left"></i> Previous"#,
    ));

    for page in &view.window {
        let active = if *page == view.current_page { " active" } else { "" };
        html.push_str(&format!(
            r##"<li class="page-item{}"><a class="page-link" href="#" data-page="{}">{}</a></li>"##,
            active, page, page
        ));
    }

    html.push_str(&step_link(
        view.next_page(),
        r#"Next <i class="fas fa-chevron-right"></i>"#,
    ));
    html.push_str("</ul>");
    html
}

fn step_link(target: Option<u32>, label: &str) -> String {
    match target {
        Some(page) => format!(
            r##"<li class="page-item"><a class="page-link" href="#" data-page="{}">{}</a></li>"##,
            page, label
        ),
        None => format!(
            r##"<li class="page-item"><a class="page-link disabled" href="#">{}</a></li>"##,
            label
        ),
    }
}

/// Renders the article detail view
pub fn article_detail(article: &Article) -> String {
    format!(
        concat!(
            r#"<div class="article-modal" data-slug="{slug}"><div class="article-modal-content">"#,
            r##"<div class="article-modal-header"><a class="article-close" href="#" data-action="close"><i class="fas fa-times"></i></a></div>"##,
            r#"<article class="article-content"><header class="article-header">"#,
            r#"<h1>{title}</h1>"#,
            r#"<div class="article-meta"><span class="article-date">{date}</span><span class="article-read-time">{read_time} min read</span><span class="article-author">by {author}</span></div>"#,
            r#"<div class="article-tags">{tags}</div>"#,
            r#"</header>"#,
            r#"<div class="article-image"><img src="{image}" alt="{alt}"></div>"#,
            r#"<div class="article-body">{body}</div>"#,
            r#"</article></div></div>"#
        ),
        slug = encode_double_quoted_attribute(&article.slug),
        title = encode_text(&article.title),
        date = format_date(&article.published_at),
        read_time = article.read_time,
        author = encode_text(&article.author),
        tags = render_tags(&article.tags),
        image = encode_double_quoted_attribute(&article.image),
        alt = encode_double_quoted_attribute(&article.title),
        body = markdown_to_html(&article.content),
    )
}

pub fn loading_state() -> String {
    r#"<div class="loading-articles"><div class="loading-spinner"></div><p>Loading articles...</p></div>"#
        .to_string()
}

pub fn empty_state() -> String {
    concat!(
        r#"<div class="empty-state"><i class="fas fa-file-alt"></i>"#,
        r#"<h3>No Articles Found</h3><p>Try adjusting your search or filter criteria.</p></div>"#
    )
    .to_string()
}

/// Error affordance with a retry action
pub fn error_state() -> String {
    concat!(
        r#"<div class="error-state"><i class="fas fa-exclamation-triangle"></i>"#,
        r#"<h3>Unable to Load Articles</h3><p>Please try again later.</p>"#,
        r#"<button class="btn btn-primary" data-action="retry">Retry</button></div>"#
    )
    .to_string()
}

/// Error affordance for a homepage section with neither API nor fallback data
pub fn unavailable_state() -> String {
    concat!(
        r#"<div class="error-state"><i class="fas fa-exclamation-triangle"></i>"#,
        r#"<h3>No Articles Available</h3><p>Please set up the CMS or check the fallback articles configuration.</p></div>"#
    )
    .to_string()
}

fn offline_notice() -> &'static str {
    r#"<div class="offline-notice"><p>Showing offline content. Some features may be limited.</p></div>"#
}

/// Wraps a fragment in a standalone HTML document
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        encode_text(title),
        body
    )
}
