//! Daytrip - day-trip research and briefing generator
//!
//! Daytrip answers one narrow question: given a destination city and a list
//! of interests, produce a short day-trip briefing. It queries a web-search
//! provider for three independent facets (travel tips, budget estimate,
//! nearby hotels), asks an LLM to synthesize an itinerary, and merges all of
//! it into a single Markdown document.
//!
//! # Core Concepts
//!
//! - **Injected Clients**: search and LLM providers are trait objects passed
//!   into the pipeline, never ambient globals - tests substitute mocks
//! - **Sentinel Strings**: facet fetchers always return a string; missing
//!   data and provider failures become fixed fallback messages
//! - **Linear Pipeline**: AwaitCity -> AwaitInterests -> Synthesizing -> Done,
//!   no loops, no retries, no branching
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and OpenAI-compatible implementation
//! - [`search`] - web-search client trait and Tavily implementation
//! - [`research`] - summary extraction, point splitting, facet fetchers,
//!   itinerary synthesis
//! - [`pipeline`] - planner state machine and combined-document assembly
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod research;
pub mod search;

// Re-export commonly used types
pub use config::{Config, LlmConfig, SearchConfig};
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, Message, Role};
pub use pipeline::{PipelineError, Planner, PlannerState, Stage, TripSections};
pub use research::{
    Facet, ItineraryReply, ItineraryWriter, MarkerSplitter, Researcher, SummarySplitter, extract_summary,
};
pub use search::{SearchClient, SearchError, SearchResponse, SearchResult};
