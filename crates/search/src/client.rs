//! Lookup collaborator boundary
//!
//! The pipeline drives anything implementing [`SearchClient`]; the concrete
//! network client lives in the excluded transport layer. Failures cross this
//! boundary as [`SearchError`] and are downgraded to "no results" by the
//! pipeline.

use async_trait::async_trait;
use thiserror::Error;

use crate::product::Product;

/// Error surface of a product lookup.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never completed (connection refused, timeout, ...).
    #[error("search request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("search backend returned status {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("invalid search response body")]
    Decode(#[from] serde_json::Error),
}

/// Asynchronous product lookup collaborator.
#[async_trait]
pub trait SearchClient: Send + Sync + 'static {
    /// Look up products matching `query`, ordered by relevance.
    async fn search(&self, query: &str) -> Result<Vec<Product>, SearchError>;
}
