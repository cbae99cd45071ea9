//! LLM itinerary synthesis and marker splitting
//!
//! One completion call per briefing: a fixed two-turn prompt, no retry, no
//! streaming. The reply is split once on the "Practical Tips:" marker;
//! replies without the marker degrade to an itinerary-only result. LLM
//! failures are deliberately NOT absorbed into sentinel strings here -
//! unlike search failures, they propagate to the caller.

use std::sync::Arc;

use tracing::debug;

use crate::llm::{CompletionRequest, LlmClient, LlmError, Message};

/// Marker dividing the itinerary body from the practical-tips tail
pub const PRACTICAL_TIPS_MARKER: &str = "Practical Tips:";

/// Fixed human turn of the two-turn prompt
const HUMAN_TURN: &str = "Create an itinerary for my day trip.";

/// The model reply, split into its two parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryReply {
    /// Always present (the whole reply when the marker is absent)
    pub itinerary: String,

    /// Empty when the reply carries no "Practical Tips:" marker
    pub practical_tips: String,
}

/// Synthesizes a day-trip itinerary from city and interests
pub struct ItineraryWriter {
    llm: Arc<dyn LlmClient>,
    max_tokens: u32,
}

impl ItineraryWriter {
    pub fn new(llm: Arc<dyn LlmClient>, max_tokens: u32) -> Self {
        debug!(%max_tokens, "ItineraryWriter::new: called");
        Self { llm, max_tokens }
    }

    /// Build the system instruction embedding city and interests
    fn system_prompt(city: &str, interests: &[String]) -> String {
        format!(
            "You are a practical, relatable travel assistant. Fetch real travel tips and \
             create a mini-itinerary for {} based on the user's interests: {}. Make it \
             suitable for group brainstorming and discussion. Provide a brief, bulleted \
             itinerary and practical tips.",
            city,
            interests.join(", ")
        )
    }

    /// Invoke the model once and split the reply
    pub async fn synthesize(&self, city: &str, interests: &[String]) -> Result<ItineraryReply, LlmError> {
        debug!(%city, interest_count = %interests.len(), "ItineraryWriter::synthesize: called");

        let request = CompletionRequest {
            system_prompt: Self::system_prompt(city, interests),
            messages: vec![Message::user(HUMAN_TURN)],
            max_tokens: self.max_tokens,
        };

        let response = self.llm.complete(request).await?;
        let content = response.content.unwrap_or_default();
        debug!(reply_len = %content.len(), "ItineraryWriter::synthesize: got reply");

        Ok(split_reply(&content))
    }
}

/// Split a reply on the first "Practical Tips:" marker
///
/// Text before the marker (trimmed) is the itinerary; text after (trimmed)
/// is the practical tips. Marker absent: the whole trimmed reply is the
/// itinerary and practical tips are empty. No further structure is imposed
/// on the model's output.
pub fn split_reply(content: &str) -> ItineraryReply {
    debug!(content_len = %content.len(), "split_reply: called");
    match content.split_once(PRACTICAL_TIPS_MARKER) {
        Some((before, after)) => {
            debug!("split_reply: marker found");
            ItineraryReply {
                itinerary: before.trim().to_string(),
                practical_tips: after.trim().to_string(),
            }
        }
        None => {
            debug!("split_reply: marker absent, itinerary-only reply");
            ItineraryReply {
                itinerary: content.trim().to_string(),
                practical_tips: String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;

    #[test]
    fn test_split_reply_with_marker() {
        let reply = split_reply("Visit X.\nPractical Tips:\nBring water.");
        assert_eq!(reply.itinerary, "Visit X.");
        assert_eq!(reply.practical_tips, "Bring water.");
    }

    #[test]
    fn test_split_reply_without_marker() {
        let reply = split_reply("  Visit X and Y.  ");
        assert_eq!(reply.itinerary, "Visit X and Y.");
        assert_eq!(reply.practical_tips, "");
    }

    #[test]
    fn test_split_reply_splits_on_first_marker_only() {
        let reply = split_reply("Morning plan\nPractical Tips:\nPack light. Practical Tips: again");
        assert_eq!(reply.itinerary, "Morning plan");
        assert_eq!(reply.practical_tips, "Pack light. Practical Tips: again");
    }

    #[test]
    fn test_system_prompt_embeds_city_and_interests() {
        let prompt =
            ItineraryWriter::system_prompt("Lisbon", &["food".to_string(), "history".to_string()]);
        assert!(prompt.contains("mini-itinerary for Lisbon"));
        assert!(prompt.contains("food, history"));
    }

    #[tokio::test]
    async fn test_synthesize_splits_mock_reply() {
        let llm = Arc::new(MockLlmClient::replying("Day plan here.\nPractical Tips:\nWear shoes."));
        let writer = ItineraryWriter::new(llm, 2048);

        let reply = writer
            .synthesize("Lisbon", &["food".to_string()])
            .await
            .unwrap();
        assert_eq!(reply.itinerary, "Day plan here.");
        assert_eq!(reply.practical_tips, "Wear shoes.");
    }

    #[tokio::test]
    async fn test_synthesize_propagates_llm_error() {
        // No scripted responses: the mock errors, and synthesize must NOT
        // absorb it the way facet fetchers do
        let llm = Arc::new(MockLlmClient::new(vec![]));
        let writer = ItineraryWriter::new(llm, 2048);

        let result = writer.synthesize("Lisbon", &["food".to_string()]).await;
        assert!(result.is_err());
    }
}
