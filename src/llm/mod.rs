//! LLM client module for daytrip
//!
//! Provides the completion request/response types, the `LlmClient` seam the
//! itinerary synthesizer is written against, and the OpenAI-compatible
//! implementation used in production.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod openai;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use openai::OpenAIClient;
pub use types::{CompletionRequest, CompletionResponse, Message, Role, StopReason, TokenUsage};

use crate::config::LlmConfig;

/// Create an LLM client based on the provider specified in config
///
/// The client is constructed once at startup and injected into the pipeline;
/// nothing in this crate holds a process-wide client.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "openai" | "groq" => {
            debug!("create_client: creating OpenAI-compatible client");
            Ok(Arc::new(OpenAIClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(LlmError::InvalidResponse(format!(
                "Unknown LLM provider: '{}'. Supported: openai, groq",
                other
            )))
        }
    }
}
