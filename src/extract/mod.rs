//! Model-assisted component extraction.
//!
//! An empty result always means "use the heuristic path"; failures are
//! logged here and never reach the caller.

pub mod parse;
pub mod prompt;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::ExtractError;
use crate::graph::Component;
use crate::ports::{bounded, CompletionRequest, LlmClient};
use crate::structure::RepoStructure;

/// Upper bound on the model's answer.
const MAX_TOKENS: u32 = 2000;
/// Low temperature keeps the component list close to deterministic.
const TEMPERATURE: f32 = 0.2;

/// Asks a language model for the repository's components.
pub struct ComponentExtractor<'a> {
    llm: &'a dyn LlmClient,
    model: String,
    timeout: Option<Duration>,
}

impl<'a> ComponentExtractor<'a> {
    /// Creates an extractor using the configured extraction model and timeout.
    #[must_use]
    pub fn new(llm: &'a dyn LlmClient, settings: &Settings) -> Self {
        Self { llm, model: settings.extract_model.clone(), timeout: settings.llm_timeout() }
    }

    /// Extracts components, or returns an empty list to request the fallback.
    ///
    /// The model is never called for an upstream error or a blank listing.
    pub async fn extract(&self, repo: &str, structure: &RepoStructure) -> Vec<Component> {
        let listing = match structure {
            Ok(listing) if !listing.trim().is_empty() => listing,
            Ok(_) => {
                debug!("structure is empty, skipping model extraction");
                return Vec::new();
            }
            Err(e) => {
                debug!("structure unavailable ({e}), skipping model extraction");
                return Vec::new();
            }
        };

        match self.try_extract(repo, listing).await {
            Ok(components) => {
                info!("model identified {} components", components.len());
                components
            }
            Err(e) => {
                warn!("model extraction failed, falling back to heuristics: {e}");
                Vec::new()
            }
        }
    }

    /// Runs one extraction round trip, surfacing every failure.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractError`] if the call fails, times out, or the
    /// response does not parse against the component schema.
    pub async fn try_extract(
        &self,
        repo: &str,
        listing: &str,
    ) -> Result<Vec<Component>, ExtractError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            system: Some(prompt::SYSTEM_PROMPT.to_string()),
            prompt: prompt::user_message(repo, listing),
            max_tokens: MAX_TOKENS,
            temperature: Some(TEMPERATURE),
        };
        debug!("sending {} bytes of structure to {}", listing.len(), self.model);

        let response = bounded(self.llm.complete(&request), self.timeout)
            .await
            .map_err(ExtractError::Timeout)?
            .map_err(|e| ExtractError::Model(e.to_string()))?;

        parse::parse_components(&response.text)
    }
}
