use async_trait::async_trait;
use lookup_service::config::{AppConfig, SearchConfig, ServerConfig};
use lookup_service::services::{Document, SearchError, SearchStore};
use lookup_service::startup::Application;
use std::collections::HashMap;
use std::sync::Arc;

/// Fake index: serves documents from memory, or fails every lookup with a
/// fixed upstream error.
pub struct InMemorySearchStore {
    documents: HashMap<String, Document>,
    failure: Option<String>,
}

impl InMemorySearchStore {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            failure: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_document(mut self, document: serde_json::Value) -> Self {
        let fields = document
            .as_object()
            .expect("test document must be a JSON object")
            .clone();
        let key = fields
            .get("id")
            .and_then(|v| v.as_str())
            .expect("test document must have a string 'id' field")
            .to_string();
        self.documents.insert(key, fields);
        self
    }

    #[allow(dead_code)]
    pub fn failing_with(message: &str) -> Self {
        Self {
            documents: HashMap::new(),
            failure: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl SearchStore for InMemorySearchStore {
    async fn get_document(&self, key: &str) -> Result<Document, SearchError> {
        if let Some(message) = &self.failure {
            return Err(SearchError::Upstream(anyhow::anyhow!("{}", message)));
        }

        self.documents
            .get(key)
            .cloned()
            .ok_or_else(|| SearchError::NotFound {
                message: format!("No document with key '{}' was found in the index.", key),
            })
    }
}

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn(store: InMemorySearchStore) -> Self {
        let config = AppConfig {
            server: ServerConfig { port: 0 }, // Random port for testing
            search: SearchConfig {
                service_name: "test".to_string(),
                api_key: "test-key".to_string(),
                index_name: "good-books".to_string(),
            },
        };

        let app = Application::build_with_store(config, Arc::new(store))
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
        }
    }
}
