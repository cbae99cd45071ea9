//! Facet fetchers: travel tips, budget estimate, nearby hotels
//!
//! Each briefing run fetches three independent facets from the search
//! provider. Fetchers always return a formatted string - a Markdown bullet
//! list, a raw-content fallback, a "No ... found." sentinel, or an
//! "Error fetching ..." sentinel. They never return an error to the caller.

use std::sync::Arc;

use tracing::debug;

use super::extract::extract_summary;
use super::points::{MarkerSplitter, SummarySplitter};
use crate::search::{SearchClient, SearchResult};

/// One of the three independent research categories fetched per request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Tips,
    Budget,
    Hotels,
}

impl Facet {
    /// Human-readable label used in sentinel and error strings
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Tips => "travel tips",
            Facet::Budget => "budget estimate",
            Facet::Hotels => "nearby hotels",
        }
    }

    /// Build the facet-specific search query
    pub fn query(&self, city: &str, interests: &[String]) -> String {
        debug!(?self, %city, "Facet::query: called");
        let joined = interests.join(", ");
        match self {
            Facet::Tips => format!("best spots in {} for {} on a budget", city, joined),
            Facet::Budget => format!("average daily travel cost in {} for {}", city, joined),
            Facet::Hotels => format!("best budget hotels in {} for {}", city, joined),
        }
    }

    /// Sentinel returned when the query yields zero results
    pub fn empty_sentinel(&self) -> String {
        format!("No {} found.", self.label())
    }
}

/// Fetches and reduces search results into formatted facet strings
///
/// Holds the injected search client and the point splitter; one instance is
/// used for all three facets of a run.
pub struct Researcher {
    search: Arc<dyn SearchClient>,
    splitter: Box<dyn SummarySplitter>,
}

impl Researcher {
    /// Create a researcher with the default list-marker splitter
    pub fn new(search: Arc<dyn SearchClient>) -> Self {
        debug!("Researcher::new: called");
        Self {
            search,
            splitter: Box::new(MarkerSplitter),
        }
    }

    /// Create a researcher with a custom splitter
    pub fn with_splitter(search: Arc<dyn SearchClient>, splitter: Box<dyn SummarySplitter>) -> Self {
        debug!("Researcher::with_splitter: called");
        Self { search, splitter }
    }

    /// Fetch one facet and reduce it to a formatted string
    ///
    /// Search failures are caught here and converted to the
    /// "Error fetching {label}: {description}" envelope.
    pub async fn fetch(&self, facet: Facet, city: &str, interests: &[String]) -> String {
        debug!(?facet, %city, "Researcher::fetch: called");
        let query = facet.query(city, interests);

        match self.search.search(&query).await {
            Ok(response) => {
                debug!(?facet, result_count = %response.results.len(), "Researcher::fetch: got results");
                match facet {
                    Facet::Budget => self.reduce_budget(facet, &response.results),
                    Facet::Tips | Facet::Hotels => self.reduce_points(facet, &response.results),
                }
            }
            Err(e) => {
                debug!(?facet, error = %e, "Researcher::fetch: search failed");
                format!("Error fetching {}: {}", facet.label(), e)
            }
        }
    }

    /// Tips/Hotels reduction: aggregate every result's points into one
    /// Markdown bullet list
    fn reduce_points(&self, facet: Facet, results: &[SearchResult]) -> String {
        debug!(?facet, result_count = %results.len(), "Researcher::reduce_points: called");
        if results.is_empty() {
            debug!(?facet, "Researcher::reduce_points: no results");
            return facet.empty_sentinel();
        }

        let mut all_points = Vec::new();
        for result in results {
            let summary = extract_summary(result);
            all_points.extend(self.splitter.split(&summary));
        }

        if all_points.is_empty() {
            // Fallback to the raw content fields if splitting fails
            debug!(?facet, "Researcher::reduce_points: splitting yielded nothing, falling back to raw content");
            return results
                .iter()
                .map(|r| r.content.clone().unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\n");
        }

        all_points
            .iter()
            .map(|point| format!("- {}", point))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Budget reduction: prioritized match, not aggregation
    ///
    /// The first result whose title mentions "cost" or "budget" wins;
    /// otherwise the first result; with zero results, the sentinel.
    fn reduce_budget(&self, facet: Facet, results: &[SearchResult]) -> String {
        debug!(result_count = %results.len(), "Researcher::reduce_budget: called");
        for result in results {
            if let Some(title) = &result.title {
                let lower = title.to_lowercase();
                if lower.contains("cost") || lower.contains("budget") {
                    debug!(%title, "Researcher::reduce_budget: title match");
                    return extract_summary(result);
                }
            }
        }

        match results.first() {
            Some(first) => {
                debug!("Researcher::reduce_budget: no title match, using first result");
                extract_summary(first)
            }
            None => {
                debug!("Researcher::reduce_budget: no results");
                facet.empty_sentinel()
            }
        }
    }
}
