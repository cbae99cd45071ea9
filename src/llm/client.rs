//! LlmClient trait definition

use async_trait::async_trait;
#[allow(unused_imports)]
use tracing::debug;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless LLM client - each call is independent (fresh context)
///
/// This is the core abstraction for interacting with language models. The
/// itinerary synthesizer makes exactly one completion call per briefing;
/// no conversation state is maintained between calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request (blocking until complete)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    use crate::llm::{StopReason, TokenUsage};

    /// Mock LLM client for unit tests
    pub struct MockLlmClient {
        responses: Vec<CompletionResponse>,
        call_count: AtomicUsize,
    }

    impl MockLlmClient {
        pub fn new(responses: Vec<CompletionResponse>) -> Self {
            debug!(response_count = %responses.len(), "MockLlmClient::new: called");
            Self {
                responses,
                call_count: AtomicUsize::new(0),
            }
        }

        /// Build a mock that replies with the given text once
        pub fn replying(text: impl Into<String>) -> Self {
            Self::new(vec![CompletionResponse {
                content: Some(text.into()),
                stop_reason: StopReason::EndTurn,
                usage: TokenUsage::default(),
            }])
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            debug!("MockLlmClient::complete: called");
            let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
            self.responses.get(idx).cloned().ok_or_else(|| {
                debug!("MockLlmClient::complete: no more mock responses");
                LlmError::InvalidResponse("No more mock responses".to_string())
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::llm::Message;

        #[tokio::test]
        async fn test_mock_client_returns_responses() {
            let client = MockLlmClient::replying("Response 1");

            let req = CompletionRequest {
                system_prompt: "Test".to_string(),
                messages: vec![Message::user("Hello")],
                max_tokens: 1000,
            };

            let resp = client.complete(req.clone()).await.unwrap();
            assert_eq!(resp.content, Some("Response 1".to_string()));
            assert_eq!(client.call_count(), 1);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockLlmClient::new(vec![]);

            let req = CompletionRequest {
                system_prompt: "Test".to_string(),
                messages: vec![],
                max_tokens: 1000,
            };

            let result = client.complete(req).await;
            assert!(result.is_err());
        }
    }
}
