use crate::services::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub id: Option<String>,
}

/// Envelope returned on a successful lookup: `{ "document": { ... } }`.
#[derive(Debug, Serialize)]
pub struct LookupOutput {
    pub document: Document,
}
