//! Tavily search API client implementation
//!
//! Implements the SearchClient trait against Tavily's `/search` endpoint.
//! One POST per query, no pagination, no result scoring beyond the order
//! the provider returns.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{SearchClient, SearchError, SearchResponse};
use crate::config::SearchConfig;

/// Tavily search API client
pub struct TavilyClient {
    api_key: String,
    base_url: String,
    http: Client,
    max_results: u32,
}

impl TavilyClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        debug!(base_url = %config.base_url, max_results = %config.max_results, "TavilyClient::from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder().timeout(timeout).build().map_err(SearchError::Network)?;

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_results: config.max_results,
        })
    }
}

#[async_trait]
impl SearchClient for TavilyClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        debug!(%query, "search: called");
        let url = format!("{}/search", self.base_url);

        let body = serde_json::json!({
            "query": query,
            "max_results": self.max_results,
        });

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(SearchError::Network)?;

        let status = response.status().as_u16();

        if !response.status().is_success() {
            debug!(%status, "search: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError { status, message: text });
        }

        debug!("search: success");
        let search_response: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        debug!(result_count = %search_response.results.len(), "search: parsed results");
        Ok(search_response)
    }
}
