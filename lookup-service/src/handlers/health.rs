use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "lookup-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// No dependency probe here: the only dependency is the remote search index
// and readiness must not spend its request quota.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
