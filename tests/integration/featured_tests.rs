//! Homepage featured section against a mock API

use crate::{api_record, context_for, context_with, envelope, numbered_records};
use portfolio_blog::app::{load_featured, FeaturedSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_featured_articles() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("filters[featured][$eq]", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![
            api_record(1, "a", "2024-03-15T10:00:00.000Z", true, &["Java"]),
            api_record(2, "b", "2024-02-15T10:00:00.000Z", true, &["Java"]),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = context_for(&mock_server);
    let section = load_featured(&ctx, 3).await;

    assert_eq!(section.source, FeaturedSource::Featured);
    assert_eq!(section.articles.len(), 2);
    assert!(section.articles.iter().all(|a| a.featured));
}

#[tokio::test]
async fn test_latest_when_nothing_featured() {
    let mock_server = MockServer::start().await;

    // mounted first, so it wins for the featured query
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("filters[featured][$eq]", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("pagination[page]", "1"))
        .and(query_param("pagination[pageSize]", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(numbered_records(3))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = context_for(&mock_server);
    let section = load_featured(&ctx, 3).await;

    assert_eq!(section.source, FeaturedSource::Latest);
    assert_eq!(section.articles.len(), 3);
}

#[tokio::test]
async fn test_fallback_on_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let ctx = context_for(&mock_server);
    let section = load_featured(&ctx, 2).await;

    assert_eq!(section.source, FeaturedSource::Fallback);
    assert_eq!(section.articles.len(), 2);
    assert_eq!(section.articles[0].slug, "spring-boot-optimization");
}

#[tokio::test]
async fn test_unavailable_without_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let ctx = context_with(&mock_server.uri(), false);
    let section = load_featured(&ctx, 3).await;

    assert_eq!(section.source, FeaturedSource::Unavailable);
    assert!(section.articles.is_empty());
    assert!(section.render().contains("No Articles Available"));
}
