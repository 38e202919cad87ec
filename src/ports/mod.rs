//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the diagram pipeline and an
//! external system (language model, layout engine, repository source).
//! Implementations live in `src/adapters/`.

use std::future::Future;
use std::time::Duration;

pub mod layout;
pub mod llm;
pub mod source;

pub use layout::{LayoutEngine, LayoutFuture};
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmFuture};
pub use source::StructureSource;

/// Awaits `call`, giving up after `limit` if one is set.
///
/// On expiry returns the limit in whole seconds for error reporting.
pub(crate) async fn bounded<F: Future>(call: F, limit: Option<Duration>) -> Result<F::Output, u64> {
    match limit {
        Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| limit.as_secs()),
        None => Ok(call.await),
    }
}
