//! Planner state machine
//!
//! One briefing request is one pass through a strictly linear progression:
//! AwaitCity -> AwaitInterests -> Synthesizing -> Done. No stage is retried
//! or revisited, and the pipeline always reaches Done with a document -
//! facet failures are absorbed upstream as sentinel strings. The one
//! exception is an LLM failure, which aborts the run (see `PipelineError`).

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::document::TripSections;
use crate::llm::{LlmClient, LlmError, Message};
use crate::research::{Facet, ItineraryWriter, Researcher};
use crate::search::SearchClient;

/// Pipeline stages, in strict linear order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitCity,
    AwaitInterests,
    Synthesizing,
    Done,
}

/// Errors from driving the planner
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A stage method was called out of order
    #[error("pipeline is at stage {actual:?}, expected {expected:?}")]
    StageMismatch { expected: Stage, actual: Stage },

    /// The itinerary model call failed; NOT absorbed into a sentinel string
    /// the way search failures are
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// The accumulating record threaded through one briefing request
///
/// Created fresh per request and discarded once the document is handed to
/// the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct PlannerState {
    /// Destination city, empty until provided
    pub city: String,

    /// Interests as given, comma-split and trimmed, nothing dropped
    pub interests: Vec<String>,

    /// Append-only audit log of raw inputs and the final reply; no later
    /// stage reads it back
    pub transcript: Vec<Message>,

    /// The combined document, set exactly once at the end
    pub document: String,
}

/// Drives one briefing request through the three-step flow
pub struct Planner {
    researcher: Researcher,
    writer: ItineraryWriter,
    state: PlannerState,
    stage: Stage,
}

impl Planner {
    /// Create a planner with injected provider clients
    pub fn new(search: Arc<dyn SearchClient>, llm: Arc<dyn LlmClient>, max_tokens: u32) -> Self {
        debug!("Planner::new: called");
        Self {
            researcher: Researcher::new(search),
            writer: ItineraryWriter::new(llm, max_tokens),
            state: PlannerState::default(),
            stage: Stage::AwaitCity,
        }
    }

    /// Current pipeline stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Accumulated state (read-only)
    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    fn expect_stage(&self, expected: Stage) -> Result<(), PipelineError> {
        if self.stage != expected {
            debug!(?expected, actual = ?self.stage, "Planner::expect_stage: mismatch");
            return Err(PipelineError::StageMismatch {
                expected,
                actual: self.stage,
            });
        }
        Ok(())
    }

    /// Accept the city input: AwaitCity -> AwaitInterests
    pub fn provide_city(&mut self, input: &str) -> Result<(), PipelineError> {
        debug!(%input, "Planner::provide_city: called");
        self.expect_stage(Stage::AwaitCity)?;

        self.state.city = input.to_string();
        self.state.transcript.push(Message::user(input));
        self.stage = Stage::AwaitInterests;
        Ok(())
    }

    /// Accept the comma-separated interests input: AwaitInterests -> Synthesizing
    ///
    /// Components are trimmed but never dropped - empty components stay,
    /// as given.
    pub fn provide_interests(&mut self, input: &str) -> Result<(), PipelineError> {
        debug!(%input, "Planner::provide_interests: called");
        self.expect_stage(Stage::AwaitInterests)?;

        self.state.interests = input.split(',').map(|i| i.trim().to_string()).collect();
        self.state.transcript.push(Message::user(input));
        self.stage = Stage::Synthesizing;
        Ok(())
    }

    /// Run the three facet fetches and the itinerary call, assemble the
    /// document: Synthesizing -> Done
    ///
    /// The fetches and the model call are independent and run sequentially;
    /// none shares mutable state. Facet failures surface as sentinel
    /// strings inside the sections; only an LLM failure aborts.
    pub async fn synthesize(&mut self) -> Result<TripSections, PipelineError> {
        debug!(city = %self.state.city, "Planner::synthesize: called");
        self.expect_stage(Stage::Synthesizing)?;

        let city = &self.state.city;
        let interests = &self.state.interests;
        info!("Creating a briefing for {} based on interests: {}", city, interests.join(", "));

        let travel_tips = self.researcher.fetch(Facet::Tips, city, interests).await;
        let budget_estimate = self.researcher.fetch(Facet::Budget, city, interests).await;
        let nearby_hotels = self.researcher.fetch(Facet::Hotels, city, interests).await;

        let reply = self.writer.synthesize(city, interests).await?;

        let sections = TripSections {
            travel_tips,
            budget_estimate,
            nearby_hotels,
            itinerary: reply.itinerary,
            practical_tips: reply.practical_tips,
        };

        let document = sections.render();
        self.state.transcript.push(Message::assistant(document.clone()));
        self.state.document = document;
        self.stage = Stage::Done;

        debug!("Planner::synthesize: done");
        Ok(sections)
    }

    /// The combined document (empty until Done)
    pub fn document(&self) -> &str {
        &self.state.document
    }
}
