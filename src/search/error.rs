//! Search error types

use thiserror::Error;

/// Errors that can occur during search operations
///
/// Facet fetchers catch every one of these at the fetch boundary and turn
/// them into user-visible sentinel strings; they never cross the pipeline.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
