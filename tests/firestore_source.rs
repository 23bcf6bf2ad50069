//! Firestore REST listing against a local mock store.

mod common;

use car_gallery::config::SourceConfig;
use car_gallery::source::{FirestoreSource, SourceError, VehicleSource};
use common::mock_store::{MockResponse, MockStore};
use common::{firestore_doc, fleet};
use serde_json::json;

fn config_for(store: &MockStore) -> SourceConfig {
    SourceConfig {
        project_id: "demo".to_string(),
        collection: "cars".to_string(),
        base_url: store.base_url(),
        page_size: 2,
        timeout_seconds: 5,
        ..SourceConfig::default()
    }
}

#[tokio::test]
async fn single_page_in_store_order() {
    let store = MockStore::start().await;
    let vehicles = fleet(2);
    store
        .enqueue(MockResponse::json(json!({
            "documents": vehicles.iter().map(firestore_doc).collect::<Vec<_>>()
        })))
        .await;

    let source = FirestoreSource::new(&config_for(&store)).unwrap();
    let fetched = source.fetch_all().await.unwrap();
    assert_eq!(fetched, vehicles);

    let requests = store.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].project, "demo");
    assert_eq!(requests[0].database, "(default)");
    assert_eq!(requests[0].collection, "cars");
    assert_eq!(requests[0].query.page_size, Some(2));
    assert!(requests[0].query.page_token.is_none());
    assert_eq!(requests[0].raw_query, "pageSize=2");
}

#[tokio::test]
async fn follows_page_tokens_into_one_batch() {
    let store = MockStore::start().await;
    let vehicles = fleet(3);
    store
        .enqueue(MockResponse::json(json!({
            "documents": [firestore_doc(&vehicles[0]), firestore_doc(&vehicles[1])],
            "nextPageToken": "page-2"
        })))
        .await;
    store
        .enqueue(MockResponse::json(json!({
            "documents": [firestore_doc(&vehicles[2])]
        })))
        .await;

    let source = FirestoreSource::new(&config_for(&store)).unwrap();
    let fetched = source.fetch_all().await.unwrap();
    assert_eq!(fetched, vehicles);

    let requests = store.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].query.page_token.as_deref(), Some("page-2"));
    assert_eq!(requests[1].raw_query, "pageSize=2&pageToken=page-2");
}

#[tokio::test]
async fn api_key_is_sent_as_query_parameter() {
    let store = MockStore::start().await;
    let config = SourceConfig {
        api_key: Some("web-key".to_string()),
        ..config_for(&store)
    };

    let source = FirestoreSource::new(&config).unwrap();
    source.fetch_all().await.unwrap();

    let requests = store.requests().await;
    assert_eq!(requests[0].query.key.as_deref(), Some("web-key"));
    assert_eq!(requests[0].raw_query, "pageSize=2&key=web-key");
}

#[tokio::test]
async fn empty_collection_yields_empty_list() {
    let store = MockStore::start().await;
    store.enqueue(MockResponse::json(json!({}))).await;

    let source = FirestoreSource::new(&config_for(&store)).unwrap();
    assert!(source.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn undecodable_documents_are_skipped() {
    let store = MockStore::start().await;
    let vehicles = fleet(2);
    store
        .enqueue(MockResponse::json(json!({
            "documents": [
                firestore_doc(&vehicles[0]),
                {
                    "name": "projects/demo/databases/(default)/documents/cars/broken",
                    "fields": {"model": {"stringValue": "No Year"}}
                },
                firestore_doc(&vehicles[1])
            ]
        })))
        .await;

    let source = FirestoreSource::new(&config_for(&store)).unwrap();
    let fetched = source.fetch_all().await.unwrap();
    assert_eq!(fetched, vehicles);
}

#[tokio::test]
async fn error_status_carries_store_message() {
    let store = MockStore::start().await;
    store
        .enqueue(MockResponse::error(403, "Missing or insufficient permissions."))
        .await;

    let source = FirestoreSource::new(&config_for(&store)).unwrap();
    let err = source.fetch_all().await.unwrap_err();
    match err {
        SourceError::Status { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Missing or insufficient permissions.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let store = MockStore::start().await;
    store
        .enqueue(MockResponse::raw(200, "not json"))
        .await;

    let source = FirestoreSource::new(&config_for(&store)).unwrap();
    let err = source.fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn slow_store_times_out_as_request_error() {
    let store = MockStore::start().await;
    store
        .enqueue(MockResponse::json(json!({})).with_delay(3_000))
        .await;
    let config = SourceConfig {
        timeout_seconds: 1,
        ..config_for(&store)
    };

    let source = FirestoreSource::new(&config).unwrap();
    let err = source.fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), "request");
}

#[test]
fn invalid_base_url_is_rejected() {
    let config = SourceConfig {
        base_url: "not a url".to_string(),
        ..SourceConfig::default()
    };
    let err = FirestoreSource::new(&config).err().unwrap();
    assert_eq!(err.kind(), "invalid_endpoint");
}
