//! Best-available summary extraction from a search result

use tracing::debug;

use crate::search::SearchResult;

/// Sentinel returned when a result carries no usable text at all
pub const NO_SUMMARY: &str = "No summary available";

/// Extract the best-available summary string from one search result
///
/// Returns the first non-empty value among `snippet`, `content`, `title`,
/// in that priority order. A result with every field absent or empty yields
/// the fixed sentinel; absence is never an error.
pub fn extract_summary(result: &SearchResult) -> String {
    debug!("extract_summary: called");
    for field in [&result.snippet, &result.content, &result.title] {
        if let Some(value) = field
            && !value.is_empty()
        {
            return value.clone();
        }
    }
    debug!("extract_summary: all fields absent or empty");
    NO_SUMMARY.to_string()
}
