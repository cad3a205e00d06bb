//! Configuration files driving a full context

use crate::{envelope, numbered_records};
use portfolio_blog::config::{load_config, load_config_with_hash};
use portfolio_blog::{AppContext, BlogPage, ConfigError, SortMode, StoreState, UserEvent};
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[tokio::test]
async fn test_config_file_drives_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("sort[0]", "publishedAt:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(numbered_records(5))))
        .mount(&mock_server)
        .await;

    let file = write_config(&format!(
        r#"
[api]
hostname = "example.com"
base-url = "{}"

[blog]
page-size = 2
"#,
        mock_server.uri()
    ));

    let (config, hash) = load_config_with_hash(file.path()).unwrap();
    assert_eq!(hash.len(), 64);

    let ctx = AppContext::init(config).unwrap();
    assert_eq!(ctx.client().base_url(), mock_server.uri());

    let mut page = BlogPage::new(ctx);
    page.apply(UserEvent::Sort(SortMode::Oldest));
    assert_eq!(page.load().await, StoreState::Loaded);
    assert_eq!(page.store().page_slice().len(), 2);
    assert_eq!(page.store().pagination().total_pages, 3);
}

#[test]
fn test_invalid_config_is_rejected() {
    let file = write_config(
        r#"
[blog]
page-size = 0
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_non_http_base_url_is_rejected() {
    let file = write_config(
        r#"
[api]
base-url = "ftp://cms.example.com"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl(_)));
}
