//! Integration tests for daytrip
//!
//! These tests drive the whole pipeline end-to-end with mock provider
//! clients: AwaitCity -> AwaitInterests -> Synthesizing -> Done, verifying
//! the combined document and the failure-handling asymmetry between the
//! search and LLM boundaries.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use daytrip::llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, StopReason, TokenUsage};
use daytrip::pipeline::{PipelineError, Planner, Stage};
use daytrip::search::{SearchClient, SearchError, SearchResponse, SearchResult};

// =============================================================================
// Mock collaborators
// =============================================================================

/// Search client returning the same canned results for every query
struct FakeSearch {
    results: Vec<SearchResult>,
    queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SearchClient for FakeSearch {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(SearchResponse {
            results: self.results.clone(),
        })
    }
}

/// Search client that fails every query
struct BrokenSearch;

#[async_trait]
impl SearchClient for BrokenSearch {
    async fn search(&self, _query: &str) -> Result<SearchResponse, SearchError> {
        Err(SearchError::ApiError {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}

/// LLM client returning a fixed reply
struct FakeLlm {
    reply: String,
}

#[async_trait]
impl LlmClient for FakeLlm {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        Ok(CompletionResponse {
            content: Some(self.reply.clone()),
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage::default(),
        })
    }
}

/// LLM client that always fails
struct BrokenLlm;

#[async_trait]
impl LlmClient for BrokenLlm {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        Err(LlmError::ApiError {
            status: 500,
            message: "model overloaded".to_string(),
        })
    }
}

fn lisbon_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            title: Some("Lisbon Budget Costs".to_string()),
            snippet: Some("1. Alfama district 2. Belem tower - Tram 28".to_string()),
            content: Some("Full page content about Lisbon".to_string()),
            url: Some("https://example.com/lisbon".to_string()),
        },
        SearchResult {
            title: Some("City Guide".to_string()),
            snippet: None,
            content: Some("- Miradouro walks - Pasteis de Belem".to_string()),
            url: None,
        },
    ]
}

// =============================================================================
// End-to-end pipeline
// =============================================================================

#[tokio::test]
async fn test_full_pipeline_produces_ordered_document() {
    let search = Arc::new(FakeSearch::new(lisbon_results()));
    let llm = Arc::new(FakeLlm {
        reply: "Morning: castle. Afternoon: river.\nPractical Tips:\nBring water.".to_string(),
    });

    let mut planner = Planner::new(search.clone(), llm, 2048);
    assert_eq!(planner.stage(), Stage::AwaitCity);

    planner.provide_city("Lisbon").unwrap();
    planner.provide_interests("food, history").unwrap();
    let sections = planner.synthesize().await.unwrap();
    assert_eq!(planner.stage(), Stage::Done);

    // One query per facet, in facet order
    let queries = search.queries.lock().unwrap().clone();
    assert_eq!(
        queries,
        vec![
            "best spots in Lisbon for food, history on a budget".to_string(),
            "average daily travel cost in Lisbon for food, history".to_string(),
            "best budget hotels in Lisbon for food, history".to_string(),
        ]
    );

    // Budget facet picked the "Costs" title match, unsplit
    assert_eq!(sections.budget_estimate, "1. Alfama district 2. Belem tower - Tram 28");

    // Tips aggregated points from both results into one bullet list
    assert_eq!(
        sections.travel_tips,
        "- Alfama district\n- Belem tower\n- Tram 28\n- Miradouro walks\n- Pasteis de Belem"
    );

    // Document carries all five headings, in fixed order
    let doc = planner.document().to_string();
    let positions: Vec<usize> = [
        "### Travel Tips",
        "### Budget Estimation",
        "### Nearby Hotels",
        "### Itinerary",
        "### Practical Tips",
    ]
    .iter()
    .map(|h| doc.find(h).unwrap_or_else(|| panic!("missing heading {}", h)))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_pipeline_reaches_done_when_every_facet_fails() {
    let search = Arc::new(BrokenSearch);
    let llm = Arc::new(FakeLlm {
        reply: "A quiet walking day.".to_string(),
    });

    let mut planner = Planner::new(search, llm, 2048);
    planner.provide_city("Lisbon").unwrap();
    planner.provide_interests("food, history").unwrap();
    let sections = planner.synthesize().await.unwrap();

    assert_eq!(planner.stage(), Stage::Done);
    assert!(sections.travel_tips.starts_with("Error fetching travel tips:"));
    assert!(sections.budget_estimate.starts_with("Error fetching budget estimate:"));
    assert!(sections.nearby_hotels.starts_with("Error fetching nearby hotels:"));

    // All four mandatory headings still present
    let doc = planner.document();
    for heading in [
        "### Travel Tips",
        "### Budget Estimation",
        "### Nearby Hotels",
        "### Itinerary",
    ] {
        assert!(doc.contains(heading), "missing heading {}", heading);
    }
    // No marker in the reply: practical tips omitted
    assert!(!doc.contains("### Practical Tips"));
}

#[tokio::test]
async fn test_llm_failure_aborts_the_run() {
    let search = Arc::new(FakeSearch::new(lisbon_results()));
    let llm = Arc::new(BrokenLlm);

    let mut planner = Planner::new(search, llm, 2048);
    planner.provide_city("Lisbon").unwrap();
    planner.provide_interests("food").unwrap();

    let err = planner.synthesize().await.unwrap_err();
    assert!(matches!(err, PipelineError::Llm(LlmError::ApiError { status: 500, .. })));
    assert!(planner.document().is_empty());
}

#[tokio::test]
async fn test_empty_results_yield_sentinels_not_empty_strings() {
    let search = Arc::new(FakeSearch::new(vec![]));
    let llm = Arc::new(FakeLlm {
        reply: "Stay home, it is raining.".to_string(),
    });

    let mut planner = Planner::new(search, llm, 2048);
    planner.provide_city("Bergen").unwrap();
    planner.provide_interests("museums").unwrap();
    let sections = planner.synthesize().await.unwrap();

    assert_eq!(sections.travel_tips, "No travel tips found.");
    assert_eq!(sections.budget_estimate, "No budget estimate found.");
    assert_eq!(sections.nearby_hotels, "No nearby hotels found.");
    assert_eq!(sections.itinerary, "Stay home, it is raining.");
    assert_eq!(sections.practical_tips, "");
}
