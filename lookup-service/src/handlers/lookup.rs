use crate::dtos::{LookupOutput, LookupParams};
use crate::error::AppError;
use crate::services::SearchError;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

/// `GET|POST /lookup?id=<key>`: fetch one document by key from the configured
/// index and return it as `{ "document": { ... } }`.
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = match params.id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "The 'id' parameter is required."
            )))
        }
    };

    let document = state.search.get_document(id).await.map_err(|e| match e {
        SearchError::NotFound { message } => {
            tracing::info!(document_id = %id, "Document not found");
            AppError::NotFound(anyhow::anyhow!(
                "Document with ID '{}' was not found. Error: {}",
                id,
                message
            ))
        }
        SearchError::Upstream(err) => {
            tracing::error!(document_id = %id, error = %err, "Search lookup failed");
            AppError::Upstream(anyhow::anyhow!(
                "An unexpected error occurred. Error: {}",
                err
            ))
        }
    })?;

    // Serialize fully before committing the 200 so a failure here can still
    // produce a complete error response.
    let output = LookupOutput { document };
    let body = serde_json::to_string(&output).map_err(|e| {
        tracing::error!(document_id = %id, error = %e, "Failed to serialize lookup output");
        AppError::Serialization(anyhow::anyhow!(
            "An error occurred during serialization. Error: {}",
            e
        ))
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    ))
}
