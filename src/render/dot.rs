//! Graphviz DOT description of a component graph.

use std::fmt::Write as _;

use crate::graph::{Component, ComponentGraph, EdgeStyle, Provenance};

/// Longest description shown inside a node before it is cut.
const MAX_DESCRIPTION: usize = 80;

/// Serializes `graph` as a left-to-right DOT digraph titled after `repo`.
///
/// The heuristic catch-all component is not drawn, and neither is any edge
/// touching it. See [`Component::is_implicit_root`].
#[must_use]
pub fn to_dot(graph: &ComponentGraph, repo: &str) -> String {
    let mut out = String::new();

    out.push_str("digraph architecture {\n");
    out.push_str("  rankdir=LR;\n");
    let _ = writeln!(out, "  label=\"Architecture of {}\";", escape(repo));
    out.push_str("  labelloc=t;\n");
    out.push_str("  fontsize=20;\n");
    out.push_str("  node [shape=box, fontname=\"Helvetica\", fontsize=11];\n");
    out.push_str("  edge [fontname=\"Helvetica\", fontsize=9];\n");
    out.push('\n');

    for component in graph.components().filter(|c| !c.is_implicit_root()) {
        let _ = writeln!(out, "  \"{}\" [{}];", escape(&component.name), node_attrs(component));
    }

    let hidden = |name: &str| graph.get(name).is_some_and(Component::is_implicit_root);
    let edges = graph.edges();
    let drawn = edges.iter().filter(|e| !hidden(e.source) && !hidden(e.target));
    let mut wrote_separator = false;
    for edge in drawn {
        if !wrote_separator {
            out.push('\n');
            wrote_separator = true;
        }
        let mut attrs = Vec::new();
        if let Some(label) = edge.label {
            attrs.push(format!("label=\"{}\"", escape(label)));
        }
        if edge.style == EdgeStyle::Dashed {
            attrs.push("style=dashed".to_string());
        }
        let _ = write!(out, "  \"{}\" -> \"{}\"", escape(edge.source), escape(edge.target));
        if !attrs.is_empty() {
            let _ = write!(out, " [{}]", attrs.join(", "));
        }
        out.push_str(";\n");
    }

    out.push_str("}\n");
    out
}

fn node_attrs(component: &Component) -> String {
    match component.provenance {
        Provenance::Model => format!(
            "label=\"{}\\n{}\", style=\"rounded,filled\", fillcolor=lightskyblue",
            escape(&component.name),
            escape(&truncate(&component.description))
        ),
        Provenance::Heuristic => format!(
            "label=\"{}\\n({} files)\", style=\"rounded,filled\", fillcolor=\"#eeeeee\"",
            escape(&component.name),
            component.files.len()
        ),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_DESCRIPTION {
        let cut: String = text.chars().take(MAX_DESCRIPTION).collect();
        format!("{}...", cut.trim_end())
    } else {
        text.to_string()
    }
}

/// Escapes a value for use inside a double-quoted DOT string.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Component;
    use crate::heuristic;

    #[test]
    fn heuristic_graph_omits_root_and_counts_files() {
        let graph = heuristic::derive("main.py\nfrontend/\n    app.js\n    style.css\nbackend/\n    server.py\n");

        let dot = to_dot(&graph, "shop");

        assert!(dot.starts_with("digraph architecture {"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("label=\"Architecture of shop\";"));
        assert!(dot.contains("\"frontend\" [label=\"frontend\\n(2 files)\""));
        assert!(dot.contains("\"frontend\" -> \"backend\";"));
        assert!(!dot.contains("\"root\""));
    }

    #[test]
    fn model_nodes_carry_descriptions_and_edge_labels() {
        let mut api = Component::heuristic("API");
        api.provenance = Provenance::Model;
        api.description = "Serves \"orders\"".into();
        api.dependencies = vec!["Store".into()];
        api.dependency_details.insert("Store".into(), "reads rows".into());
        let mut store = Component::heuristic("Store");
        store.provenance = Provenance::Model;
        store.description = "Postgres".into();
        let graph = ComponentGraph::from_components(vec![api, store]);

        let dot = to_dot(&graph, "shop");

        assert!(dot.contains("label=\"API\\nServes \\\"orders\\\"\", style=\"rounded,filled\", fillcolor=lightskyblue"));
        assert!(dot.contains("\"API\" -> \"Store\" [label=\"reads rows\"];"));
    }

    #[test]
    fn model_component_named_root_is_drawn() {
        let mut root = Component::heuristic("root");
        root.provenance = Provenance::Model;
        root.description = "Entry point".into();
        root.dependencies = vec!["Api".into()];
        let mut api = Component::heuristic("Api");
        api.provenance = Provenance::Model;
        let graph = ComponentGraph::from_components(vec![root, api]);

        let dot = to_dot(&graph, "shop");

        assert!(dot.contains("\"root\" [label=\"root\\nEntry point\""));
        assert!(dot.contains("\"root\" -> \"Api\";"));
    }

    #[test]
    fn dashed_edges_are_marked() {
        let graph = heuristic::derive("web/\n    index.html\nlib/\n    helpers.js\n");
        let dot = to_dot(&graph, "r");
        assert!(dot.contains("\"frontend\" -> \"utils\" [style=dashed];"));
    }

    #[test]
    fn long_descriptions_are_cut() {
        let long = "x".repeat(200);
        let cut = truncate(&long);
        assert_eq!(cut.len(), MAX_DESCRIPTION + 3);
        assert!(cut.ends_with("..."));
    }
}
