//! Web-search client module for daytrip
//!
//! Provides the duck-typed search result records, the `SearchClient` seam
//! the facet fetchers are written against, and the Tavily implementation
//! used in production.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod tavily;
mod types;

pub use client::SearchClient;
pub use error::SearchError;
pub use tavily::TavilyClient;
pub use types::{SearchResponse, SearchResult};

use crate::config::SearchConfig;

/// Create a search client based on the provider specified in config
pub fn create_client(config: &SearchConfig) -> Result<Arc<dyn SearchClient>, SearchError> {
    debug!(provider = %config.provider, "create_client: called");
    match config.provider.as_str() {
        "tavily" => {
            debug!("create_client: creating Tavily client");
            Ok(Arc::new(TavilyClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(SearchError::InvalidResponse(format!(
                "Unknown search provider: '{}'. Supported: tavily",
                other
            )))
        }
    }
}
