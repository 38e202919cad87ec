//! Error types for each stage of diagram generation.
//!
//! Only [`UpstreamError`] and [`SummaryError`] ever leave the library; the
//! extraction and rendering errors are absorbed by the degradation pipeline
//! and only show up in logs.

use thiserror::Error;

/// Why the repository structure could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
    /// The repository does not exist or is not reachable.
    NotFound,
    /// The repository is private and needs credentials.
    AuthRequired,
    /// Cloning failed for some other reason.
    CloneFailed,
    /// The clone succeeded but walking it failed.
    AnalysisFailed,
    /// The repository has no files worth listing.
    Empty,
}

/// The structure source failed; the message is shown verbatim in the error diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UpstreamError {
    /// Classification of the failure.
    pub kind: UpstreamKind,
    /// Human-readable message, including the offending location.
    pub message: String,
}

impl UpstreamError {
    /// Builds the canonical error for a repository that cannot be found.
    #[must_use]
    pub fn not_found(location: &str) -> Self {
        Self {
            kind: UpstreamKind::NotFound,
            message: format!("[Error: Repository not found or not accessible: {location}]"),
        }
    }

    /// Builds the canonical error for a private repository.
    #[must_use]
    pub fn auth_required(location: &str) -> Self {
        Self {
            kind: UpstreamKind::AuthRequired,
            message: format!(
                "[Error: Repository is private and requires authentication: {location}]"
            ),
        }
    }

    /// Builds the error for a clone that failed for an unclassified reason.
    #[must_use]
    pub fn clone_failed(detail: &str) -> Self {
        Self {
            kind: UpstreamKind::CloneFailed,
            message: format!("[Error cloning repository]: {}", detail.trim()),
        }
    }

    /// Builds the error for a failure while walking a fetched repository.
    #[must_use]
    pub fn analysis_failed(detail: &str) -> Self {
        Self {
            kind: UpstreamKind::AnalysisFailed,
            message: format!("[Error analyzing repository]: {}", detail.trim()),
        }
    }

    /// Builds the warning for a repository with no listable files.
    #[must_use]
    pub fn empty(location: &str) -> Self {
        Self {
            kind: UpstreamKind::Empty,
            message: format!("[Warning: Repository appears to be empty: {location}]"),
        }
    }

    /// Interprets a legacy error-tagged structure string.
    ///
    /// Returns `None` when `raw` is an ordinary listing. Any string starting
    /// with `[Error` or `[Warning` is treated as tagged; the message is kept
    /// as-is so the error diagram shows exactly what the producer wrote.
    #[must_use]
    pub fn from_tagged(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let kind = if trimmed.starts_with("[Error: Repository not found") {
            UpstreamKind::NotFound
        } else if trimmed.starts_with("[Error: Repository is private") {
            UpstreamKind::AuthRequired
        } else if trimmed.starts_with("[Error cloning") {
            UpstreamKind::CloneFailed
        } else if trimmed.starts_with("[Warning") {
            UpstreamKind::Empty
        } else if trimmed.starts_with("[Error") {
            UpstreamKind::AnalysisFailed
        } else {
            return None;
        };
        Some(Self { kind, message: trimmed.trim_end().to_string() })
    }
}

/// Failure of model-assisted component extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The language-model call itself failed.
    #[error("model request failed: {0}")]
    Model(String),
    /// The language-model call did not finish in time.
    #[error("model request timed out after {0} seconds")]
    Timeout(u64),
    /// The response was not valid JSON.
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON did not match the component schema.
    #[error("response violates the component schema: {0}")]
    Schema(String),
}

/// Failure to turn a component graph into SVG.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The layout engine reported an error or could not be started.
    #[error("layout engine failed: {0}")]
    Layout(String),
    /// The layout engine did not finish in time.
    #[error("layout engine timed out after {0} seconds")]
    Timeout(u64),
    /// The layout engine produced something that is not an SVG document.
    #[error("layout engine output is not SVG (starts with {0:?})")]
    NotSvg(String),
}

/// Failure to produce the natural-language summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The language-model call itself failed.
    #[error("model request failed: {0}")]
    Model(String),
    /// The language-model call did not finish in time.
    #[error("model request timed out after {0} seconds")]
    Timeout(u64),
    /// The model answered with nothing.
    #[error("model returned an empty summary")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_tagged_strings() {
        let cases = [
            ("[Error: Repository not found or not accessible: u]", UpstreamKind::NotFound),
            ("[Error: Repository is private and requires authentication: u]", UpstreamKind::AuthRequired),
            ("[Error cloning repository]: fatal", UpstreamKind::CloneFailed),
            ("[Error analyzing repository]: boom", UpstreamKind::AnalysisFailed),
            ("[Warning: Repository appears to be empty: u]", UpstreamKind::Empty),
        ];
        for (raw, kind) in cases {
            let err = UpstreamError::from_tagged(raw).expect("tagged");
            assert_eq!(err.kind, kind, "{raw}");
            assert_eq!(err.message, raw);
        }
    }

    #[test]
    fn plain_listing_is_not_tagged() {
        assert!(UpstreamError::from_tagged("src/\n    main.rs").is_none());
        assert!(UpstreamError::from_tagged("").is_none());
    }

    #[test]
    fn constructors_round_trip_through_tagging() {
        let err = UpstreamError::not_found("https://github.com/x/y");
        assert_eq!(UpstreamError::from_tagged(&err.message), Some(err));
    }
}
