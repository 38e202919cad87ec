//! Layout engine port turning a DOT graph description into SVG.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`LayoutEngine::layout`].
pub type LayoutFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Lays out and serializes a graph.
///
/// Abstracting the engine keeps rendering testable without Graphviz
/// installed, and lets cassettes capture its output.
pub trait LayoutEngine: Send + Sync {
    /// Lays out the DOT source and returns the serialized SVG.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be run or rejects the input.
    fn layout(&self, dot: &str) -> LayoutFuture<'_>;
}
