//! Integration tests using mock HTTP server
//!
//! Tests the full flow: properties → data source → paginated HTTP requests →
//! entity processor rows

use jsonapi_connector::processor::{EntityContext, JsonApiEntityProcessor, RowProducible};
use jsonapi_connector::template::TemplateContext;
use jsonapi_connector::{
    ConnectorConfig, Error, Fetchable, JsonApiDataSource, QueryCounter, RowCursor, StringMap,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn json_page(body: &Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/vnd.api+json")
}

async fn mount_items(mock_server: &MockServer) {
    let uri = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("page", "2"))
        .respond_with(json_page(&json!({
            "data": [{"id": 3}],
            "links": {}
        })))
        .expect(1)
        .mount(mock_server)
        .await;

    // Lower priority so the page=2 mock wins when both match
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(json_page(&json!({
            "data": [{"id": 1}, {"id": 2}],
            "links": {"next": format!("{uri}/items?page=2")}
        })))
        .with_priority(10)
        .expect(1)
        .mount(mock_server)
        .await;
}

// ============================================================================
// End-to-End
// ============================================================================

#[tokio::test]
async fn test_two_page_fetch_through_cursor() {
    let mock_server = MockServer::start().await;
    mount_items(&mock_server).await;

    let counter = QueryCounter::new();
    let config = ConnectorConfig::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .build();
    let source = JsonApiDataSource::new(config, counter.clone()).unwrap();

    let records = source.fetch("items").await.unwrap();
    let values: Vec<Value> = records.iter().cloned().map(Value::Object).collect();
    assert_eq!(values, vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]);
    assert_eq!(counter.get(), 2);

    let mut cursor = RowCursor::new(records);
    for id in 1..=3 {
        assert!(cursor.has_next());
        assert_eq!(cursor.next().unwrap()["id"], id);
    }
    assert!(!cursor.has_next());
    assert!(cursor.next().is_none());
}

#[tokio::test]
async fn test_entity_processor_from_properties() {
    let mock_server = MockServer::start().await;
    mount_items(&mock_server).await;

    let props: StringMap = [
        ("baseUrl".to_string(), "{{ api }}/".to_string()),
        ("connectionTimeout".to_string(), "not-a-number".to_string()),
        ("readTimeout".to_string(), "3000".to_string()),
    ]
    .into_iter()
    .collect();
    let tokens = TemplateContext::with_vars(json!({
        "api": mock_server.uri(),
        "resource": "items"
    }));

    let counter = QueryCounter::new();
    let source = JsonApiDataSource::from_properties(&props, &tokens, counter.clone()).unwrap();
    assert_eq!(source.config().connect_timeout_ms(), 5000);
    assert_eq!(source.config().read_timeout_ms(), 3000);

    let entity = EntityContext::with_resolver(StringMap::new(), Arc::new(tokens))
        .attribute("url", "{{ resource }}");
    let mut processor = JsonApiEntityProcessor::init(&entity, &source).await.unwrap();

    let mut ids = Vec::new();
    while let Some(row) = processor.next_row() {
        ids.push(row["id"].as_i64().unwrap());
    }

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(processor.next_row(), None);
    assert_eq!(counter.get(), 2);
}

// ============================================================================
// Failure Handling
// ============================================================================

#[tokio::test]
async fn test_failure_on_last_page_yields_no_rows() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(json_page(&json!({
            "data": [{"id": 1}],
            "links": {"next": format!("{uri}/b")}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(json_page(&json!({
            "data": [{"id": 2}],
            "links": {"next": format!("{uri}/c")}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ConnectorConfig::builder()
        .base_url(format!("{uri}/"))
        .build();
    let source = JsonApiDataSource::new(config, QueryCounter::new()).unwrap();
    let entity = EntityContext::new(StringMap::new()).attribute("url", "a");

    let err = JsonApiEntityProcessor::init(&entity, &source).await.unwrap_err();

    assert!(err.is_severe());
    assert_eq!(err.url(), Some(format!("{uri}/c").as_str()));
    assert!(matches!(err.root_cause(), Error::Decode { .. }));
    assert!(err.to_string().starts_with("Exception in invoking url"));
}

#[tokio::test]
async fn test_next_link_to_unreachable_host_fails_whole_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(json_page(&json!({
            "data": [{"id": 1}],
            "links": {"next": "http://127.0.0.1:1/next"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let counter = QueryCounter::new();
    let source = JsonApiDataSource::new(ConnectorConfig::default(), counter.clone()).unwrap();

    let err = source
        .fetch(&format!("{}/start", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(err.is_severe());
    assert_eq!(err.url(), Some("http://127.0.0.1:1/next"));
    assert_eq!(counter.get(), 1);
}
