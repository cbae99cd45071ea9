//! SearchClient trait definition

use async_trait::async_trait;
#[allow(unused_imports)]
use tracing::debug;

use super::{SearchError, SearchResponse};

/// Stateless web-search client - one free-text query, one response
///
/// This is the seam the facet fetchers are written against. Results are
/// never cached or reused between queries.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run a single search query
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError>;
}
