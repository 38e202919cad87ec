//! Structure source port producing the indented listing of a repository.

use crate::error::UpstreamError;

/// Produces the structure listing for a repository location.
///
/// The listing format is one entry per line, four spaces of indentation per
/// level and a trailing `/` on directories.
pub trait StructureSource: Send + Sync {
    /// Fetches the listing for `location` (a URL or a path).
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] describing why no listing is available.
    fn fetch(&self, location: &str) -> Result<String, UpstreamError>;
}
