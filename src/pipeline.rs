//! Strategy selection and graceful degradation for a single diagram request.
//!
//! The controller walks model → heuristic → minimal → error and always ends
//! with an SVG document.

use tracing::info;

use crate::config::Settings;
use crate::extract::ComponentExtractor;
use crate::graph::ComponentGraph;
use crate::heuristic;
use crate::ports::{LayoutEngine, LlmClient};
use crate::render::{fallback, GraphRenderer};
use crate::structure::{repo_name, RepoStructure};

/// Which path produced the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramPath {
    /// Components came from the language model and rendered normally.
    Model,
    /// Components came from the keyword heuristics and rendered normally.
    Heuristic,
    /// Rendering failed; the diagram is a plain component listing.
    Minimal,
    /// The structure was unavailable; the diagram shows the error.
    Error,
}

/// The diagram plus how it was obtained.
#[derive(Debug, Clone)]
pub struct DiagramOutcome {
    /// The SVG document.
    pub svg: String,
    /// The terminal state reached.
    pub path: DiagramPath,
    /// The graph that was rendered; `None` on the error path.
    pub graph: Option<ComponentGraph>,
}

/// Picks an extraction strategy and degrades until a diagram exists.
pub struct DegradationController<'a> {
    extractor: ComponentExtractor<'a>,
    renderer: GraphRenderer<'a>,
}

impl<'a> DegradationController<'a> {
    /// Wires the controller to a language model and a layout engine.
    #[must_use]
    pub fn new(llm: &'a dyn LlmClient, engine: &'a dyn LayoutEngine, settings: &Settings) -> Self {
        Self {
            extractor: ComponentExtractor::new(llm, settings),
            renderer: GraphRenderer::new(engine, settings),
        }
    }

    /// Produces a diagram for the repository at `location`.
    ///
    /// `location` is passed to the model as-is and shortened with
    /// [`repo_name`] for the diagram title.
    pub async fn generate(&self, location: &str, structure: &RepoStructure) -> DiagramOutcome {
        let repo = repo_name(location);

        let listing = match structure {
            Ok(listing) => listing,
            Err(e) => {
                info!("structure unavailable, rendering error diagram");
                return DiagramOutcome {
                    svg: fallback::error_svg(&repo, &e.message),
                    path: DiagramPath::Error,
                    graph: None,
                };
            }
        };

        let components = self.extractor.extract(location, structure).await;
        let (graph, path) = if components.is_empty() {
            info!("using heuristic component extraction");
            (heuristic::derive(listing), DiagramPath::Heuristic)
        } else {
            info!("using model-derived components");
            (ComponentGraph::from_components(components), DiagramPath::Model)
        };

        let rendered = self.renderer.render(&graph, &repo).await;
        let path = if rendered.minimal { DiagramPath::Minimal } else { path };
        DiagramOutcome { svg: rendered.svg, path, graph: Some(graph) }
    }
}
