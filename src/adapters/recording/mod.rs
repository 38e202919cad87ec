//! Recording adapters that capture interactions to cassettes.

pub mod layout;
pub mod llm;

pub use layout::RecordingLayoutEngine;
pub use llm::RecordingLlmClient;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Records a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// A poisoned lock still records; the recorder holds plain data.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let mut guard = recorder.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    guard.record_result(port, method, input, result);
}
