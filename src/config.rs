//! Runtime settings, read from flags with environment fallbacks.
//!
//! `main` loads a `.env` file first, so every variable below can also live
//! there.

use std::fmt;
use std::time::Duration;

use clap::Args;

/// Model used for component extraction unless overridden.
pub const DEFAULT_EXTRACT_MODEL: &str = "claude-3-haiku-20240307";
/// Model used for the prose summary unless overridden.
pub const DEFAULT_SUMMARY_MODEL: &str = "claude-3-opus-20240229";
/// Layout engine binary unless overridden.
pub const DEFAULT_DOT_BINARY: &str = "dot";

/// Settings shared by every subcommand.
#[derive(Clone, Args)]
pub struct Settings {
    /// Anthropic API key used for model calls.
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Model that identifies components.
    #[arg(long, env = "ARCHSKETCH_EXTRACT_MODEL", default_value = DEFAULT_EXTRACT_MODEL, global = true)]
    pub extract_model: String,

    /// Model that writes the architecture summary.
    #[arg(long, env = "ARCHSKETCH_SUMMARY_MODEL", default_value = DEFAULT_SUMMARY_MODEL, global = true)]
    pub summary_model: String,

    /// Seconds to wait for a model response (0 waits forever).
    #[arg(long, env = "ARCHSKETCH_LLM_TIMEOUT_SECS", default_value_t = 60, global = true)]
    pub llm_timeout_secs: u64,

    /// Graphviz `dot` executable.
    #[arg(long, env = "ARCHSKETCH_DOT", default_value = DEFAULT_DOT_BINARY, global = true)]
    pub dot_binary: String,

    /// Seconds to wait for the layout engine (0 waits forever).
    #[arg(long, env = "ARCHSKETCH_LAYOUT_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub layout_timeout_secs: u64,
}

impl Settings {
    /// Model call timeout, if any.
    #[must_use]
    pub fn llm_timeout(&self) -> Option<Duration> {
        non_zero_secs(self.llm_timeout_secs)
    }

    /// Layout engine timeout, if any.
    #[must_use]
    pub fn layout_timeout(&self) -> Option<Duration> {
        non_zero_secs(self.layout_timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            extract_model: DEFAULT_EXTRACT_MODEL.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            llm_timeout_secs: 60,
            dot_binary: DEFAULT_DOT_BINARY.to_string(),
            layout_timeout_secs: 30,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("extract_model", &self.extract_model)
            .field("summary_model", &self.summary_model)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("dot_binary", &self.dot_binary)
            .field("layout_timeout_secs", &self.layout_timeout_secs)
            .finish()
    }
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_timeouts() {
        let settings = Settings { llm_timeout_secs: 0, layout_timeout_secs: 5, ..Settings::default() };
        assert_eq!(settings.llm_timeout(), None);
        assert_eq!(settings.layout_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let settings = Settings { api_key: Some("sk-ant-secret".into()), ..Settings::default() };
        let shown = format!("{settings:?}");
        assert!(!shown.contains("sk-ant-secret"));
        assert!(shown.contains("<redacted>"));
        assert!(shown.contains(DEFAULT_EXTRACT_MODEL));
    }
}
