//! Service context bundling the port trait objects a command needs.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use crate::adapters::live::{GraphvizLayout, LiveLlmClient, OfflineLlmClient};
use crate::adapters::recording::{RecordingLayoutEngine, RecordingLlmClient};
use crate::adapters::replaying::{ReplayingLayoutEngine, ReplayingLlmClient};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::Settings;
use crate::ports::layout::LayoutEngine;
use crate::ports::llm::LlmClient;

/// Bundles the model and layout ports.
///
/// Constructors wire up different adapter implementations (live, offline,
/// recording, replaying). Structure sources are chosen per location by the
/// commands and are never recorded.
pub struct ServiceContext {
    /// LLM client for language-model completions.
    pub llm: Box<dyn LlmClient>,
    /// Layout engine turning DOT into SVG.
    pub layout: Box<dyn LayoutEngine>,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context calling Anthropic and Graphviz.
    #[must_use]
    pub fn live(settings: &Settings) -> Self {
        let (llm, layout) = live_ports(settings, false);
        Self { llm, layout, recorder: None }
    }

    /// Creates a context whose model calls always fail, so every diagram
    /// takes the heuristic path.
    #[must_use]
    pub fn offline(settings: &Settings) -> Self {
        let (llm, layout) = live_ports(settings, true);
        Self { llm, layout, recorder: None }
    }

    /// Creates a live (or offline) context that captures every interaction.
    ///
    /// The cassette is written to `path` when this context is dropped. This
    /// is the developer-only mechanism behind `ARCHSKETCH_RECORD`.
    #[must_use]
    pub fn recording(settings: &Settings, offline: bool, path: &Path, location: &str) -> Self {
        let name = path
            .file_stem()
            .map_or_else(|| "archsketch-session".to_string(), |s| s.to_string_lossy().into_owned());
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, name, location)));
        let (llm, layout) = live_ports(settings, offline);

        Self {
            llm: Box::new(RecordingLlmClient::new(llm, Arc::clone(&recorder))),
            layout: Box::new(RecordingLayoutEngine::new(layout, Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// Both ports are served from the same cassette, each port/method pair
    /// from its own queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        info!(
            "replaying {} interactions from {}",
            cassette.interactions.len(),
            path.display()
        );
        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(&cassette)));

        Ok(Self {
            llm: Box::new(ReplayingLlmClient::new(Arc::clone(&replayer))),
            layout: Box::new(ReplayingLayoutEngine::new(replayer)),
            recorder: None,
        })
    }
}

fn live_ports(settings: &Settings, offline: bool) -> (Box<dyn LlmClient>, Box<dyn LayoutEngine>) {
    let llm: Box<dyn LlmClient> = if offline {
        Box::new(OfflineLlmClient)
    } else {
        Box::new(LiveLlmClient::new(settings.api_key.clone()))
    };
    (llm, Box::new(GraphvizLayout::new(settings.dot_binary.clone())))
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Some(recorder) = self.recorder.take() {
            let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
            let count = guard.interaction_count();
            match guard.finish() {
                Ok(path) => info!("{count} interactions written to {}", path.display()),
                Err(e) => warn!("failed to write cassette: {e}"),
            }
        }
    }
}
