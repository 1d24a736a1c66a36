//! lookup-service: a thin HTTP adapter in front of a managed search index.
//!
//! One endpoint, `/lookup?id=...`, fetches a single document by key from the
//! configured index and returns it wrapped in a `{ "document": ... }`
//! envelope.
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod services;
pub mod startup;
