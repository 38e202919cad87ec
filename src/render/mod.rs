//! Component graph to SVG, through the layout engine port.

pub mod dot;
pub mod fallback;

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::RenderError;
use crate::graph::ComponentGraph;
use crate::ports::{bounded, LayoutEngine};

/// How many characters of rejected engine output end up in the error.
const PREVIEW_CHARS: usize = 40;

/// A finished diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The SVG document.
    pub svg: String,
    /// `true` when layout failed and the minimal listing stands in.
    pub minimal: bool,
}

/// Renders component graphs as validated SVG.
pub struct GraphRenderer<'a> {
    engine: &'a dyn LayoutEngine,
    timeout: Option<Duration>,
}

impl<'a> GraphRenderer<'a> {
    /// Creates a renderer using the configured layout timeout.
    #[must_use]
    pub fn new(engine: &'a dyn LayoutEngine, settings: &Settings) -> Self {
        Self { engine, timeout: settings.layout_timeout() }
    }

    /// Renders `graph`, substituting the minimal listing diagram on any failure.
    pub async fn render(&self, graph: &ComponentGraph, repo: &str) -> Rendered {
        match self.try_render(graph, repo).await {
            Ok(svg) => Rendered { svg, minimal: false },
            Err(e) => {
                warn!("rendering failed, using minimal diagram: {e}");
                Rendered { svg: fallback::minimal_svg(graph, repo), minimal: true }
            }
        }
    }

    /// Renders `graph` through the layout engine and validates the result.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the engine fails, times out, or returns
    /// something other than an SVG document.
    pub async fn try_render(
        &self,
        graph: &ComponentGraph,
        repo: &str,
    ) -> Result<String, RenderError> {
        let source = dot::to_dot(graph, repo);
        debug!("laying out {} nodes, {} edges", graph.len(), graph.edge_count());

        let svg = bounded(self.engine.layout(&source), self.timeout)
            .await
            .map_err(RenderError::Timeout)?
            .map_err(|e| RenderError::Layout(e.to_string()))?;

        if !fallback::is_svg(&svg) {
            let preview: String = svg.trim_start().chars().take(PREVIEW_CHARS).collect();
            return Err(RenderError::NotSvg(preview));
        }
        debug!("layout produced {} bytes of SVG", svg.len());
        Ok(svg)
    }
}
