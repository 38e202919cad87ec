//! Live adapters for real external interactions.

pub mod layout;
pub mod llm;
pub mod offline;
pub mod source;

pub use layout::GraphvizLayout;
pub use llm::LiveLlmClient;
pub use offline::OfflineLlmClient;
pub use source::{source_for, GitCloneSource, ListingFileSource, LocalDirSource};
