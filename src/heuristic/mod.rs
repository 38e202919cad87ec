//! Deterministic, keyword-based component extraction.
//!
//! Used whenever the model-assisted extraction yields nothing.

pub mod parser;
pub mod relations;

use crate::graph::ComponentGraph;

/// Parses `structure` and adds the conventional relationships.
#[must_use]
pub fn derive(structure: &str) -> ComponentGraph {
    let mut graph = parser::parse(structure);
    relations::infer(&mut graph);
    graph
}
