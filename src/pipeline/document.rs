//! Combined-document assembly
//!
//! The briefing document is the sole output artifact: four or five labeled
//! sections in fixed order, each introduced by one Markdown heading line.
//! Both front-ends render exactly this format.

use tracing::debug;

/// The five section bodies of one briefing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripSections {
    pub travel_tips: String,
    pub budget_estimate: String,
    pub nearby_hotels: String,
    pub itinerary: String,

    /// Empty when the model reply carried no "Practical Tips:" marker;
    /// the section is omitted from the document in that case
    pub practical_tips: String,
}

impl TripSections {
    /// Labeled (heading, body) pairs in document order, skipping the
    /// optional practical-tips section when empty
    pub fn labeled(&self) -> Vec<(&'static str, &str)> {
        let mut sections = vec![
            ("Travel Tips", self.travel_tips.as_str()),
            ("Budget Estimation", self.budget_estimate.as_str()),
            ("Nearby Hotels", self.nearby_hotels.as_str()),
            ("Itinerary", self.itinerary.as_str()),
        ];
        if !self.practical_tips.is_empty() {
            sections.push(("Practical Tips", self.practical_tips.as_str()));
        }
        sections
    }

    /// Render the combined Markdown document
    pub fn render(&self) -> String {
        debug!("TripSections::render: called");
        self.labeled()
            .iter()
            .map(|(heading, body)| format!("### {}\n{}", heading, body))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
