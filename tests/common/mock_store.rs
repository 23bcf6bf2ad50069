//! Local stand-in for the Firestore REST list endpoint.
//!
//! Serves `GET /v1/projects/{project}/databases/{database}/documents/{collection}`
//! from a queue of canned pages and records what each request asked for.

#![allow(dead_code)]

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Query parameters of a list request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page_size: Option<u32>,
    pub page_token: Option<String>,
    pub key: Option<String>,
}

/// One list request as seen by the store.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub project: String,
    pub database: String,
    pub collection: String,
    pub query: ListQuery,
    /// Query string exactly as sent, for ordering checks.
    pub raw_query: String,
}

/// A canned page (or error) returned for the next request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: Value) -> Self {
        Self::raw(200, body.to_string())
    }

    /// Error body in the shape Google APIs use.
    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({
            "error": {"code": status, "message": message, "status": "FAILED_PRECONDITION"}
        });
        Self::raw(status, body.to_string())
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone, Default)]
struct StoreState {
    requests: Arc<Mutex<Vec<ListRequest>>>,
    pages: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockStore {
    pub addr: SocketAddr,
    state: StoreState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockStore {
    pub async fn start() -> Self {
        let state = StoreState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route(
                "/v1/projects/{project}/databases/{database}/documents/{collection}",
                get(list_documents),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock store");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Queue the response for the next list request. An empty queue
    /// answers with an empty collection (`{}`).
    pub async fn enqueue(&self, resp: MockResponse) {
        self.state.pages.lock().await.push_back(resp);
    }

    pub async fn requests(&self) -> Vec<ListRequest> {
        self.state.requests.lock().await.clone()
    }

    /// REST root to put in `source.base_url`.
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }
}

impl Drop for MockStore {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn list_documents(
    State(state): State<StoreState>,
    Path((project, database, collection)): Path<(String, String, String)>,
    Query(query): Query<ListQuery>,
    RawQuery(raw_query): RawQuery,
) -> Response {
    state.requests.lock().await.push(ListRequest {
        project,
        database,
        collection,
        query,
        raw_query: raw_query.unwrap_or_default(),
    });

    let page = state
        .pages
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::raw(200, "{}"));

    if page.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(page.delay_ms)).await;
    }

    let status = StatusCode::from_u16(page.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], page.body).into_response()
}
