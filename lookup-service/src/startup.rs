use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{AzureSearchStore, SearchStore};
use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub search: Arc<dyn SearchStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let search = Arc::new(AzureSearchStore::new(&config.search)?);
        Self::build_with_store(config, search).await
    }

    /// Build with an injected store. Tests use this to swap in a fake index.
    pub async fn build_with_store(
        config: AppConfig,
        search: Arc<dyn SearchStore>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            search,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/lookup", get(handlers::lookup).post(handlers::lookup))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
