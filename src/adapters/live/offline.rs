//! An `LlmClient` that never reaches a model.

use crate::ports::llm::{CompletionRequest, LlmClient, LlmFuture};

/// Refuses every completion, steering the pipeline onto its heuristic path.
pub struct OfflineLlmClient;

impl LlmClient for OfflineLlmClient {
    fn complete(&self, request: &CompletionRequest) -> LlmFuture<'_> {
        let message = format!("model calls are disabled (requested {})", request.model);
        Box::pin(async move { Err(message.into()) })
    }
}
