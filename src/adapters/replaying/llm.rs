//! Replaying adapter for the `LlmClient` port.

use std::sync::{Arc, Mutex};

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::LLM_PORT;
use crate::ports::{CompletionRequest, CompletionResponse, LlmClient, LlmFuture};

/// Serves recorded LLM completions from a cassette.
pub struct ReplayingLlmClient {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingLlmClient {
    /// Creates a replaying LLM client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl LlmClient for ReplayingLlmClient {
    fn complete(&self, _request: &CompletionRequest) -> LlmFuture<'_> {
        let output = replay_result::<CompletionResponse>(&self.replayer, LLM_PORT, "complete");
        Box::pin(async move { output })
    }
}
