//! Briefing pipeline: planner state machine and document assembly
//!
//! The orchestrator threads one request's accumulated state through the
//! facet fetchers and the itinerary writer, then assembles the combined
//! document handed back to the presentation layer.

mod document;
mod planner;

pub use document::TripSections;
pub use planner::{PipelineError, Planner, PlannerState, Stage};
