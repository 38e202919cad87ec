//! Live structure sources: a shallow git clone, a local directory, or a
//! pre-rendered listing file.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::UpstreamError;
use crate::ports::source::StructureSource;
use crate::structure::walk::render_listing;

/// Clones the repository with `git clone --depth 1` into a temporary directory
/// and walks the checkout.
pub struct GitCloneSource;

impl StructureSource for GitCloneSource {
    fn fetch(&self, location: &str) -> Result<String, UpstreamError> {
        let checkout = tempfile::tempdir()
            .map_err(|e| UpstreamError::clone_failed(&format!("cannot create temp dir: {e}")))?;
        info!("cloning {location}");

        let output = Command::new("git")
            .args(["clone", "--depth", "1", "--quiet", location])
            .arg(checkout.path())
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| UpstreamError::clone_failed(&format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_clone_failure(location, stderr.trim()));
        }
        render_listing(checkout.path(), location)
    }
}

/// Maps `git clone` stderr onto the upstream failure it describes.
fn classify_clone_failure(location: &str, stderr: &str) -> UpstreamError {
    let lower = stderr.to_lowercase();
    if lower.contains("not found") || lower.contains("404") {
        UpstreamError::not_found(location)
    } else if lower.contains("authentication") || lower.contains("could not read username") {
        UpstreamError::auth_required(location)
    } else {
        UpstreamError::clone_failed(stderr)
    }
}

/// Walks a directory that is already on disk.
pub struct LocalDirSource;

impl StructureSource for LocalDirSource {
    fn fetch(&self, location: &str) -> Result<String, UpstreamError> {
        debug!("walking local directory {location}");
        render_listing(Path::new(location), location)
    }
}

/// Reads a listing produced elsewhere.
///
/// Files holding one of the bracketed error markers are turned back into the
/// matching [`UpstreamError`].
pub struct ListingFileSource {
    path: PathBuf,
}

impl ListingFileSource {
    /// Creates a source reading `path`, whatever location is asked for.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StructureSource for ListingFileSource {
    fn fetch(&self, location: &str) -> Result<String, UpstreamError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            UpstreamError::analysis_failed(&format!("cannot read {}: {e}", self.path.display()))
        })?;
        if let Some(err) = UpstreamError::from_tagged(&text) {
            return Err(err);
        }
        if text.trim().is_empty() {
            return Err(UpstreamError::empty(location));
        }
        Ok(text)
    }
}

/// Picks the source for a location: local directories are walked in place,
/// anything else is cloned.
#[must_use]
pub fn source_for(location: &str) -> Box<dyn StructureSource> {
    if Path::new(location).is_dir() {
        Box::new(LocalDirSource)
    } else {
        Box::new(GitCloneSource)
    }
}
