//! Cassettes: recorded model and layout interactions, replayable in order.

pub mod format;
pub mod recorder;
pub mod replayer;

/// Port name used for language-model interactions.
pub const LLM_PORT: &str = "llm";
/// Port name used for layout-engine interactions.
pub const LAYOUT_PORT: &str = "layout";
