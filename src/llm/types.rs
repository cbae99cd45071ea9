//! LLM request/response types for daytrip
//!
//! These types follow the OpenAI Chat Completions shape but are
//! provider-agnostic enough to support other providers later. The itinerary
//! flow needs no tool use and no streaming, so neither is modeled.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A completion request - everything needed for one LLM call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt (the travel-assistant instruction with city/interests)
    pub system_prompt: String,

    /// User messages (a single fixed human turn for the itinerary flow)
    pub messages: Vec<Message>,

    /// Max tokens for response (from config)
    pub max_tokens: u32,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        debug!("Message::user: called");
        Self {
            role: Role::User,
            content: text.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        debug!("Message::assistant: called");
        Self {
            role: Role::Assistant,
            content: text.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text content (if any)
    pub content: Option<String>,

    /// Why the model stopped
    pub stop_reason: StopReason,

    /// Token usage for cost tracking
    pub usage: TokenUsage,
}

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndTurn,
    MaxTokens,
}

impl StopReason {
    /// Parse from an OpenAI API finish_reason string
    pub fn from_finish_reason(s: &str) -> Self {
        debug!(%s, "StopReason::from_finish_reason: called");
        match s {
            "length" => {
                debug!("StopReason::from_finish_reason: MaxTokens");
                StopReason::MaxTokens
            }
            _ => {
                debug!("StopReason::from_finish_reason: EndTurn");
                StopReason::EndTurn
            }
        }
    }
}

/// Token usage for cost tracking
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
