//! Replaying adapters that serve recorded interactions.

pub mod layout;
pub mod llm;

pub use layout::ReplayingLayoutEngine;
pub use llm::ReplayingLlmClient;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

/// Pulls the next recorded result for `port`/`method` out of the shared replayer.
///
/// Exhaustion and recorded failures both come back as errors, so a replay
/// that diverges from its recording degrades like a live failure would.
pub(crate) fn replay_result<T: DeserializeOwned>(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    let mut guard = replayer.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    guard.next_result(port, method).map_err(Into::into)
}
