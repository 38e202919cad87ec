//! Renders a directory tree on disk as an indented structure listing.

use std::fmt::Write as _;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, warn};

use super::INDENT_UNIT;
use crate::error::UpstreamError;

/// Entry names never included in a listing.
const IGNORED_NAMES: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    ".vscode",
    ".idea",
    ".DS_Store",
    ".env",
    "venv",
    "env",
    ".pytest_cache",
];

/// Walks `root` and renders it as an indented listing, directories suffixed with `/`.
///
/// Entries are sorted by name within each directory. `location` is only used
/// to label the errors.
///
/// # Errors
///
/// Returns [`UpstreamError::analysis_failed`] if `root` is not a readable
/// directory and [`UpstreamError::empty`] if nothing remains after filtering.
pub fn render_listing(root: &Path, location: &str) -> Result<String, UpstreamError> {
    if !root.is_dir() {
        return Err(UpstreamError::analysis_failed(&format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            entry.file_name().to_str().is_none_or(|name| !IGNORED_NAMES.contains(&name))
        })
        .build();

    let mut listing = String::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        // Depth 0 is the root itself.
        let Some(depth) = entry.depth().checked_sub(1) else {
            continue;
        };
        let name = entry.file_name().to_string_lossy();
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        let _ = writeln!(
            listing,
            "{:width$}{name}{}",
            "",
            if is_dir { "/" } else { "" },
            width = depth * INDENT_UNIT
        );
    }

    if listing.is_empty() {
        return Err(UpstreamError::empty(location));
    }
    debug!("rendered listing of {} ({} bytes)", root.display(), listing.len());
    Ok(listing.trim_end().to_string())
}
