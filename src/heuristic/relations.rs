//! Conventional relationships between well-known component categories.

use crate::graph::{ComponentGraph, EdgeStyle, ROOT};

/// Shared-utility category that most components are assumed to use.
pub const UTILS: &str = "utils";

/// Structural rules, applied in order when both endpoints exist.
pub const RULES: &[(&str, &str)] = &[
    ("frontend", "backend"),
    ("backend", "database"),
    ("api", "service"),
    ("service", "database"),
    ("controller", "service"),
];

/// Categories that never get an advisory edge to [`UTILS`].
const UTILS_EXEMPT: &[&str] = &[UTILS, ROOT, "docs", "tests"];

/// Adds conventional edges to `graph`.
///
/// Applying this more than once has no further effect.
pub fn infer(graph: &mut ComponentGraph) {
    for (source, target) in RULES {
        if graph.contains(source) && graph.contains(target) {
            graph.add_edge(source, target, None, EdgeStyle::Solid);
        }
    }

    if graph.contains(UTILS) {
        let users: Vec<String> = graph
            .components()
            .map(|c| c.name.clone())
            .filter(|name| !UTILS_EXEMPT.contains(&name.as_str()))
            .collect();
        for name in users {
            graph.add_edge(&name, UTILS, None, EdgeStyle::Dashed);
        }
    }
}
