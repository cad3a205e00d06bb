//! Content client against a mock API

use crate::{api_record, envelope, numbered_records};
use portfolio_blog::content::{ArticleNormalizer, ArticleQuery, ContentClient, RawArticle};
use portfolio_blog::{SortMode, TransportError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_articles_sends_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("populate", "*"))
        .and(query_param("sort[0]", "featured:desc"))
        .and(query_param("sort[1]", "publishedAt:desc"))
        .and(query_param("filters[$or][0][title][$containsi]", "spring"))
        .and(query_param("filters[$or][2][content][$containsi]", "spring"))
        .and(query_param("filters[tags][$containsi]", "Java"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![api_record(
            1,
            "spring-boot-optimization",
            "2024-03-15T10:00:00.000Z",
            true,
            &["Java", "Spring Boot"],
        )])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ContentClient::new(&mock_server.uri()).unwrap();
    let query = ArticleQuery {
        search: Some("spring".to_string()),
        tag: Some("Java".to_string()),
        sort: SortMode::Popular,
        ..ArticleQuery::default()
    };

    let result = client.list_articles(&query).await.unwrap();
    assert_eq!(result.data.len(), 1);
    match &result.data[0] {
        RawArticle::Api(record) => assert_eq!(record.attributes.slug, "spring-boot-optimization"),
        RawArticle::Flat(_) => panic!("Expected the API record shape"),
    }
}

#[tokio::test]
async fn test_featured_and_latest_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("filters[featured][$eq]", "true"))
        .and(query_param("pagination[limit]", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("pagination[page]", "2"))
        .and(query_param("pagination[pageSize]", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ContentClient::new(&mock_server.uri()).unwrap();
    assert!(client.featured_articles(3).await.unwrap().data.is_empty());
    assert!(client.latest_articles(2, 9).await.unwrap().data.is_empty());
}

#[tokio::test]
async fn test_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = ContentClient::new(&mock_server.uri()).unwrap();
    let err = client
        .list_articles(&ArticleQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = ContentClient::new(&mock_server.uri()).unwrap();
    let err = client
        .list_articles(&ArticleQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_api() {
    let client = ContentClient::new("http://127.0.0.1:9").unwrap();
    let err = client.list_tags().await.unwrap_err();
    assert!(matches!(err, TransportError::Http { .. }));
}

#[tokio::test]
async fn test_article_by_slug() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("filters[slug][$eq]", "database-performance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![api_record(
            7,
            "database-performance",
            "2024-01-10T10:00:00.000Z",
            false,
            &["Database"],
        )])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("filters[slug][$eq]", "missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let client = ContentClient::new(&mock_server.uri()).unwrap();

    let found = client.article_by_slug("database-performance").await.unwrap();
    assert!(matches!(found, Some(RawArticle::Api(_))));

    let missing = client.article_by_slug("missing").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_list_tags_accepts_both_shapes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 1, "attributes": { "name": "Java" } },
                { "name": "DevOps" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = ContentClient::new(&mock_server.uri()).unwrap();
    assert_eq!(client.list_tags().await.unwrap(), vec!["Java", "DevOps"]);
}

#[tokio::test]
async fn test_normalized_api_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 3,
                "attributes": {
                    "title": "Untagged",
                    "slug": "untagged",
                    "publishedAt": "2024-02-01T00:00:00.000Z",
                    "content": "word ".repeat(450)
                }
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = ContentClient::new(&mock_server.uri()).unwrap();
    let normalizer = ArticleNormalizer::new(
        client.base_url(),
        "Senior Java Engineer",
        "/images/blog/default-article.jpg",
    );

    let result = client.list_articles(&ArticleQuery::default()).await.unwrap();
    let article = normalizer.normalize(&result.data[0]);

    assert!(article.tags.is_empty());
    assert_eq!(article.author, "Senior Java Engineer");
    assert_eq!(article.image, "/images/blog/default-article.jpg");
    assert_eq!(article.read_time, 3);
    assert!(!article.featured);
}

#[tokio::test]
async fn test_malformed_record_is_skipped() {
    let mock_server = MockServer::start().await;

    let mut records = numbered_records(4);
    records[3]["attributes"]["title"] = json!(null);

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(records)))
        .mount(&mock_server)
        .await;

    let client = ContentClient::new(&mock_server.uri()).unwrap();
    let result = client.list_articles(&ArticleQuery::default()).await.unwrap();
    assert_eq!(result.data.len(), 3);
}
