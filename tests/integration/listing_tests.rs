//! Blog listing page end-to-end

use crate::{context_for, context_with, envelope, numbered_records};
use portfolio_blog::{BlogPage, SortMode, StoreState, UserEvent};
use scraper::{Html, Selector};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_api_listing_is_paginated() {
    let mock_server = MockServer::start().await;

    // initial load plus the page change
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(numbered_records(10))))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut page = BlogPage::new(context_for(&mock_server));
    assert_eq!(page.load().await, StoreState::Loaded);
    assert_eq!(page.store().page_slice().len(), 9);
    assert_eq!(page.store().page_slice()[0].slug, "article-10");

    assert!(page.handle(UserEvent::GoToPage(2)).await);
    let slice = page.store().page_slice();
    assert_eq!(slice.len(), 1);
    assert_eq!(slice[0].slug, "article-1");

    let pagination = page.store().pagination();
    assert_eq!(pagination.total_pages, 2);
    assert!(pagination.prev_enabled);
    assert!(!pagination.next_enabled);
}

#[tokio::test]
async fn test_invalid_page_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(numbered_records(5))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut page = BlogPage::new(context_for(&mock_server));
    page.load().await;

    assert!(!page.store().pagination().is_visible());
    assert!(!page.handle(UserEvent::GoToPage(2)).await);
    assert!(!page.render().contains("pagination"));
}

#[tokio::test]
async fn test_api_failure_search_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut page = BlogPage::new(context_for(&mock_server));
    page.handle(UserEvent::Search("spring".to_string())).await;

    assert_eq!(page.store().state(), StoreState::FallbackLoaded);
    let articles = page.store().articles();
    assert_eq!(articles.len(), 1);
    assert!(articles[0].title.starts_with("Optimizing Spring Boot Applications"));
}

#[tokio::test]
async fn test_fallback_tag_filter_is_exact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut page = BlogPage::new(context_for(&mock_server));
    page.handle(UserEvent::FilterTag(Some("Java".to_string()))).await;
    let exact = page.store().articles().len();
    assert!(exact >= 1);

    page.handle(UserEvent::FilterTag(Some("Jav".to_string()))).await;
    assert!(page.store().articles().is_empty());
    assert!(page.render().contains("No Articles Found"));
}

#[tokio::test]
async fn test_filter_change_resets_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(numbered_records(12))))
        .mount(&mock_server)
        .await;

    let mut page = BlogPage::new(context_for(&mock_server));
    page.load().await;
    page.handle(UserEvent::GoToPage(2)).await;
    assert_eq!(page.query().page(), 2);

    page.handle(UserEvent::FilterTag(Some("Java".to_string()))).await;
    assert_eq!(page.query().page(), 1);
    assert_eq!(page.store().pagination().current_page, 1);

    page.handle(UserEvent::GoToPage(2)).await;
    page.handle(UserEvent::Sort(SortMode::Oldest)).await;
    assert_eq!(page.query().page(), 1);
    assert_eq!(page.store().page_slice()[0].slug, "article-1");
}

#[tokio::test]
async fn test_failure_without_fallback_then_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(numbered_records(2))))
        .mount(&mock_server)
        .await;

    let mut page = BlogPage::new(context_with(&mock_server.uri(), false));
    assert_eq!(page.load().await, StoreState::Failed);
    assert!(page.render().contains("Unable to Load Articles"));

    assert!(page.handle(UserEvent::Retry).await);
    assert_eq!(page.store().state(), StoreState::Loaded);
    assert_eq!(page.store().articles().len(), 2);
}

#[tokio::test]
async fn test_rendered_listing_markup() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(numbered_records(10))))
        .mount(&mock_server)
        .await;

    let mut page = BlogPage::new(context_for(&mock_server));
    page.load().await;

    let html = Html::parse_fragment(&page.render());
    let cards = Selector::parse("article.blog-card").unwrap();
    let links = Selector::parse("a.blog-link").unwrap();
    let active = Selector::parse("li.page-item.active a").unwrap();
    let image = Selector::parse("div.blog-image img").unwrap();

    assert_eq!(html.select(&cards).count(), 9);

    let delays: Vec<_> = html
        .select(&cards)
        .map(|card| card.value().attr("data-reveal-delay").unwrap().to_string())
        .collect();
    assert_eq!(delays[0], "0");
    assert_eq!(delays[8], "800");

    for link in html.select(&links) {
        assert!(link.value().attr("href").unwrap().starts_with("#article/"));
    }

    let active_page: String = html.select(&active).next().unwrap().text().collect();
    assert_eq!(active_page, "1");

    let src = html.select(&image).next().unwrap().value().attr("src").unwrap();
    assert_eq!(src, format!("{}/uploads/cover.jpg", mock_server.uri()));
}

#[tokio::test]
async fn test_subscriber_observes_transitions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(numbered_records(3))))
        .mount(&mock_server)
        .await;

    let mut page = BlogPage::new(context_for(&mock_server));
    let mut rx = page.subscribe();
    assert_eq!(rx.borrow_and_update().state, StoreState::Idle);

    page.load().await;
    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.state, StoreState::Loaded);
    assert_eq!(snapshot.total_count, 3);
}

#[tokio::test]
async fn test_malformed_record_keeps_api_listing() {
    let mock_server = MockServer::start().await;

    let mut records = numbered_records(4);
    records[3]["attributes"]["title"] = serde_json::Value::Null;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(records)))
        .mount(&mock_server)
        .await;

    let mut page = BlogPage::new(context_for(&mock_server));
    assert_eq!(page.load().await, StoreState::Loaded);

    let articles = page.store().articles();
    assert_eq!(articles.len(), 3);
    assert!(articles.iter().all(|a| a.slug != "article-4"));
    assert!(page.store().error().is_none());
}
