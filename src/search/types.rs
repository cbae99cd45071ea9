//! Search request/response types
//!
//! Search results are loosely-shaped records: providers differ on which
//! fields they populate, so every field is optional and absence is never an
//! error. Downstream extraction handles the all-absent case.

use serde::{Deserialize, Serialize};

/// Response from a search query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ordered results, best match first
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A single search result with optional fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,

    /// Short excerpt, when the provider supplies one
    #[serde(default)]
    pub snippet: Option<String>,

    /// Longer extracted page content
    #[serde(default)]
    pub content: Option<String>,

    /// Source URL
    #[serde(default)]
    pub url: Option<String>,
}

impl SearchResult {
    /// Build a result with just a title (test helper shape, also used by
    /// providers that return nothing else)
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}
