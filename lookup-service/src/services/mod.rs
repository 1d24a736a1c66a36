pub mod search;

pub use search::{AzureSearchStore, Document, SearchError, SearchStore};
