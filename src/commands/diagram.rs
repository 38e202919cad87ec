//! `archsketch diagram` command.

use std::io::Write as _;
use std::path::Path;

use tracing::{info, warn};

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::graph::ComponentGraph;
use crate::pipeline::{DegradationController, DiagramPath};
use crate::structure::RepoStructure;

/// Execute the `diagram` command.
///
/// Writes the SVG to `out`, or to stdout when `out` is `None`. An error
/// diagram still counts as success: the SVG explains what went wrong.
///
/// # Errors
///
/// Returns an error string if the SVG cannot be written.
pub async fn run(
    ctx: &ServiceContext,
    settings: &Settings,
    location: &str,
    structure: &RepoStructure,
    out: Option<&Path>,
) -> Result<(), String> {
    let controller = DegradationController::new(ctx.llm.as_ref(), ctx.layout.as_ref(), settings);
    let outcome = controller.generate(location, structure).await;

    let components = outcome.graph.as_ref().map_or(0, ComponentGraph::len);
    match outcome.path {
        DiagramPath::Error => warn!("rendered error diagram for {location}"),
        path => info!("rendered {components} components via {path:?} path"),
    }

    write_svg(&outcome.svg, out)
}

fn write_svg(svg: &str, out: Option<&Path>) -> Result<(), String> {
    match out {
        Some(path) => {
            std::fs::write(path, svg)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            println!("Diagram written to {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{svg}").map_err(|e| format!("failed to write SVG: {e}"))
        }
    }
}
