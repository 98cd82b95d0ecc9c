mod common;

use common::{mock_config, page_body, request, SEARCH_PATH};
use portalsearch_provider::{
    fetch_all, HttpPortalClient, PortalClient, ProviderConfig, ProviderError, SearchModel,
};
use portalsearch_types::UpstreamQuery;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, total: u64, start: u64, num: u64) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("start", start.to_string()))
        .and(query_param("num", num.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(total, start, num)))
        .expect(1)
        .mount(server)
        .await;
}

// ── Page schedule ───────────────────────────────────────────────

#[tokio::test]
async fn three_batches_for_250_results() {
    let server = MockServer::start().await;
    for start in [1, 101, 201] {
        mount_page(&server, 250, start, 100).await;
    }

    let client = HttpPortalClient::new(&mock_config(&server)).unwrap();
    let fetched = fetch_all(&client, &UpstreamQuery::new("*", 100, 1), 100)
        .await
        .unwrap();

    assert_eq!(fetched.count, 250);
    assert_eq!(fetched.items.len(), 250);
    let titles: Vec<&str> = fetched
        .items
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles[0], "Item 1");
    assert_eq!(titles[100], "Item 101");
    assert_eq!(titles[249], "Item 250");
}

#[tokio::test]
async fn single_request_for_46_results() {
    let server = MockServer::start().await;
    mount_page(&server, 46, 1, 100).await;

    let client = HttpPortalClient::new(&mock_config(&server)).unwrap();
    let fetched = fetch_all(&client, &UpstreamQuery::new("*", 100, 1), 100)
        .await
        .unwrap();

    assert_eq!(fetched.count, 46);
    assert_eq!(fetched.items.len(), 46);
}

#[tokio::test]
async fn empty_result_set() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 1, 100).await;

    let client = HttpPortalClient::new(&mock_config(&server)).unwrap();
    let fetched = fetch_all(&client, &UpstreamQuery::new("*", 100, 1), 100)
        .await
        .unwrap();

    assert_eq!(fetched.count, 0);
    assert!(fetched.items.is_empty());
}

#[tokio::test]
async fn offset_shifts_every_page() {
    let server = MockServer::start().await;
    for start in [21, 121] {
        mount_page(&server, 150, start, 100).await;
    }

    let client = HttpPortalClient::new(&mock_config(&server)).unwrap();
    let fetched = fetch_all(&client, &UpstreamQuery::new("*", 100, 21), 100)
        .await
        .unwrap();

    assert_eq!(fetched.count, 150);
    assert_eq!(fetched.items.len(), 100 + 30);
}

// ── Request shape ───────────────────────────────────────────────

#[tokio::test]
async fn request_carries_query_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("f", "json"))
        .and(query_param("q", "typekeywords:\"hubSite\""))
        .and(query_param("sortField", "created"))
        .and(query_param("sortOrder", "ASC"))
        .and(query_param("bbox", "-118,32,-116,34"))
        .and(header("user-agent", "portalsearch-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(3, 1, 100)))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = mock_config(&server);
    config.user_agent = "portalsearch-tests".into();
    let model = SearchModel::new(config).unwrap();
    let collection = model
        .get_data(&request(json!({
            "where": "typekeywords = 'hubSite'",
            "orderByFields": "created ASC",
            "geometry": "-118,32,-116,34",
            "geometryType": "esriGeometryEnvelope"
        })))
        .await
        .unwrap();

    assert_eq!(collection.features.len(), 3);
}

// ── Failures ────────────────────────────────────────────────────

#[tokio::test]
async fn failing_later_page_fails_the_call() {
    let server = MockServer::start().await;
    mount_page(&server, 250, 1, 100).await;
    // May be dropped in flight once the failing sibling returns.
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("start", "101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(250, 101, 100)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("start", "201"))
        .respond_with(ResponseTemplate::new(400).set_body_string("portal error"))
        .mount(&server)
        .await;

    let client = HttpPortalClient::new(&mock_config(&server)).unwrap();
    let err = fetch_all(&client, &UpstreamQuery::new("*", 100, 1), 100)
        .await
        .unwrap_err();

    match err {
        ProviderError::Upstream { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "portal error");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn failing_first_page_stops_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpPortalClient::new(&mock_config(&server)).unwrap();
    let err = client
        .fetch_page(&UpstreamQuery::new("*", 100, 1))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 503);
    assert_eq!(err.client_message(), "Error in Arcgis Search Provider");
}

#[tokio::test]
async fn portal_error_document_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": 400, "message": "Unable to perform query.", "details": [] }
        })))
        .mount(&server)
        .await;

    let client = HttpPortalClient::new(&mock_config(&server)).unwrap();
    let err = client
        .fetch_page(&UpstreamQuery::new("*", 100, 1))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.client_message(), "Unable to perform query.");
}

#[tokio::test]
async fn unreachable_portal_is_upstream_500() {
    // Nothing listens on port 1.
    let config = ProviderConfig {
        portal_url: "http://127.0.0.1:1/sharing/rest/search".into(),
        request_timeout_secs: 5,
        ..Default::default()
    };

    let client = HttpPortalClient::new(&config).unwrap();
    let err = client
        .fetch_page(&UpstreamQuery::new("*", 100, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Upstream { status: 500, .. }));
}
