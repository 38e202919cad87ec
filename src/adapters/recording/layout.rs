//! Recording adapter for the `LayoutEngine` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::LAYOUT_PORT;
use crate::ports::{LayoutEngine, LayoutFuture};

/// Records layout calls while delegating to an inner engine.
pub struct RecordingLayoutEngine {
    inner: Box<dyn LayoutEngine>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingLayoutEngine {
    /// Creates a recording engine wrapping `inner`.
    pub fn new(inner: Box<dyn LayoutEngine>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl LayoutEngine for RecordingLayoutEngine {
    fn layout(&self, dot: &str) -> LayoutFuture<'_> {
        let dot = dot.to_string();

        Box::pin(async move {
            let result = self.inner.layout(&dot).await;
            record_result(&self.recorder, LAYOUT_PORT, "layout", &json!({ "dot": dot }), &result);
            result
        })
    }
}
