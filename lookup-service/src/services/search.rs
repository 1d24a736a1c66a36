use crate::config::SearchConfig;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::{Map, Value};
use thiserror::Error;

/// Documents are opaque to this service: a bag of fields owned by the index.
pub type Document = Map<String, Value>;

/// Tagged outcome of a point lookup. "Key does not exist" is distinguishable
/// from every other failure so the handler can map it to 404.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{0}")]
    Upstream(anyhow::Error),
}

#[async_trait]
pub trait SearchStore: Send + Sync {
    async fn get_document(&self, key: &str) -> Result<Document, SearchError>;
}

const API_VERSION: &str = "2023-11-01";

/// Client for the Azure AI Search documents REST API. Any store exposing
/// get-by-key could stand in behind [`SearchStore`].
pub struct AzureSearchStore {
    client: reqwest::Client,
    endpoint: Url,
    index: String,
    api_key: String,
}

impl AzureSearchStore {
    pub fn new(config: &SearchConfig) -> Result<Self, AppError> {
        let endpoint = Url::parse(&format!(
            "https://{}.search.windows.net/",
            config.service_name
        ))
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "invalid search service name '{}': {}",
                config.service_name,
                e
            ))
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            index: config.index_name.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn document_url(&self, key: &str) -> Result<Url, SearchError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| SearchError::Upstream(anyhow::anyhow!("search endpoint cannot be a base URL")))?
            .pop_if_empty()
            .extend(["indexes", self.index.as_str(), "docs", key]);
        url.query_pairs_mut().append_pair("api-version", API_VERSION);
        Ok(url)
    }
}

#[async_trait]
impl SearchStore for AzureSearchStore {
    async fn get_document(&self, key: &str) -> Result<Document, SearchError> {
        let url = self.document_url(key)?;

        let response = self
            .client
            .get(url)
            .header("api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SearchError::Upstream(anyhow::Error::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(status, &body);
            return if status == StatusCode::NOT_FOUND {
                Err(SearchError::NotFound { message })
            } else {
                Err(SearchError::Upstream(anyhow::anyhow!("{}", message)))
            };
        }

        let mut document: Document = response
            .json()
            .await
            .map_err(|e| SearchError::Upstream(anyhow::Error::new(e)))?;

        // The REST response carries OData metadata keys alongside the
        // document's own fields.
        document.retain(|name, _| !name.starts_with("@odata."));

        Ok(document)
    }
}

fn extract_error_message(status: StatusCode, body: &str) -> String {
    // Error bodies look like {"error": {"code": ..., "message": ...}}.
    let detail = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .map(String::from)
    });

    match detail {
        Some(message) => message,
        None if body.trim().is_empty() => format!("search service returned HTTP {}", status),
        None => body.trim().to_string(),
    }
}
