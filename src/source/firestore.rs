use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::config::SourceConfig;
use crate::model::{Document, Vehicle};
use crate::source::{SourceError, VehicleSource};

/// Upper bound on pages followed while assembling one batch.
const MAX_PAGES: usize = 64;

/// Lists a Firestore collection over the REST API.
///
/// Pages are followed only to assemble one complete batch; there is no
/// live listener. Documents that do not decode into a [`Vehicle`] are
/// skipped with a warning.
pub struct FirestoreSource {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl FirestoreSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let raw = format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            config.base_url.trim_end_matches('/'),
            config.project_id,
            config.collection
        );
        let endpoint = Url::parse(&raw).map_err(|e| SourceError::InvalidEndpoint {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| SourceError::Request {
                url: raw,
                source: e,
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            page_size: config.page_size,
        })
    }

    /// Collection URL for one page request.
    pub fn page_url(&self, page_token: Option<&str>) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("pageSize", &self.page_size.to_string());
            if let Some(token) = page_token {
                query.append_pair("pageToken", token);
            }
            if let Some(key) = &self.api_key {
                query.append_pair("key", key);
            }
        }
        url
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ListResponse, SourceError> {
        let url = self.page_url(page_token);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SourceError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| SourceError::Request {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl VehicleSource for FirestoreSource {
    fn name(&self) -> &'static str {
        "firestore"
    }

    async fn fetch_all(&self) -> Result<Vec<Vehicle>, SourceError> {
        let mut vehicles = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let page = self.fetch_page(page_token.as_deref()).await?;
            for document in page.documents {
                match Vehicle::try_from(document) {
                    Ok(vehicle) => vehicles.push(vehicle),
                    Err(err) => tracing::warn!(error = %err, "Skipping vehicle document"),
                }
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => return Ok(vehicles),
            }
        }

        tracing::warn!(max_pages = MAX_PAGES, "Stopped following page tokens");
        Ok(vehicles)
    }
}

/// Pull the human-readable message out of a Firestore error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
