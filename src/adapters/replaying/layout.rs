//! Replaying adapter for the `LayoutEngine` port.

use std::sync::{Arc, Mutex};

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::LAYOUT_PORT;
use crate::ports::{LayoutEngine, LayoutFuture};

/// Serves recorded layout output from a cassette.
pub struct ReplayingLayoutEngine {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingLayoutEngine {
    /// Creates a replaying engine backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl LayoutEngine for ReplayingLayoutEngine {
    fn layout(&self, _dot: &str) -> LayoutFuture<'_> {
        let output = replay_result::<String>(&self.replayer, LAYOUT_PORT, "layout");
        Box::pin(async move { output })
    }
}
