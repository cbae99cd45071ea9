//! Research-and-synthesis components
//!
//! The leaf logic of the briefing pipeline: summary extraction from search
//! results, heuristic point splitting, the three facet fetchers, and the
//! LLM itinerary synthesizer.

mod extract;
mod facets;
mod itinerary;
mod points;

pub use extract::{NO_SUMMARY, extract_summary};
pub use facets::{Facet, Researcher};
pub use itinerary::{ItineraryReply, ItineraryWriter, PRACTICAL_TIPS_MARKER, split_reply};
pub use points::{MarkerSplitter, SummarySplitter};
