//! Heuristic decomposition of summary text into bullet-worthy points

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Splits a summary string into discrete points
///
/// A trait seam so the list-marker heuristic can be swapped for a stricter
/// structured-list parser without touching the facet fetchers.
pub trait SummarySplitter: Send + Sync {
    /// Decompose one summary into ordered points; may yield nothing
    fn split(&self, summary: &str) -> Vec<String>;
}

/// Matches numbered-list markers ("1. ") and bare hyphens, with surrounding
/// whitespace. The bare-hyphen branch mis-splits hyphenated prose
/// ("cost-effective"); that is the documented contract of this heuristic.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:\d+\.\s+|-)\s*").expect("list marker pattern is valid"));

/// The default list-marker splitter
///
/// Splits on numbered or hyphenated list markers, trims each fragment, and
/// drops fragments that are empty after trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerSplitter;

impl SummarySplitter for MarkerSplitter {
    fn split(&self, summary: &str) -> Vec<String> {
        debug!(summary_len = %summary.len(), "MarkerSplitter::split: called");
        let points: Vec<String> = LIST_MARKER
            .split(summary)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        debug!(point_count = %points.len(), "MarkerSplitter::split: returning points");
        points
    }
}
