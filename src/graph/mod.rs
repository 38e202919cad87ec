//! Components and the directed dependency graph between them.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

/// Name of the implicit component owning files outside any recognized directory.
pub const ROOT: &str = "root";

/// Where a component's identity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Identified by the language model, with a free-text description.
    Model,
    /// Inferred from directory-name keywords.
    Heuristic,
}

/// A named architectural unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Unique name within a graph.
    pub name: String,
    /// Short purpose statement; empty for heuristic components.
    pub description: String,
    /// Raw file names attributed to this component.
    pub files: BTreeSet<String>,
    /// Declared dependencies, in declaration order, without duplicates.
    pub dependencies: Vec<String>,
    /// Relationship label per dependency name.
    pub dependency_details: BTreeMap<String, String>,
    /// How the component was identified.
    pub provenance: Provenance,
}

impl Component {
    /// Creates an empty heuristic component.
    #[must_use]
    pub fn heuristic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            files: BTreeSet::new(),
            dependencies: Vec::new(),
            dependency_details: BTreeMap::new(),
            provenance: Provenance::Heuristic,
        }
    }

    /// Records a dependency unless it is already declared.
    pub fn add_dependency(&mut self, name: &str) {
        if !self.dependencies.iter().any(|d| d == name) {
            self.dependencies.push(name.to_string());
        }
    }

    /// Returns `true` for the catch-all component the heuristic parser adds
    /// for top-level files. Renderers leave it out of the drawing; a model
    /// component that happens to be called `root` is drawn like any other.
    #[must_use]
    pub fn is_implicit_root(&self) -> bool {
        self.provenance == Provenance::Heuristic && self.name == ROOT
    }
}

/// Visual weight of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    /// A structural dependency.
    Solid,
    /// An advisory relationship, such as use of shared utilities.
    Dashed,
}

/// Edge weight stored in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EdgeData {
    label: Option<String>,
    style: EdgeStyle,
}

/// A borrowed view of one directed dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    /// Depending component.
    pub source: &'a str,
    /// Component depended upon.
    pub target: &'a str,
    /// Optional relationship description.
    pub label: Option<&'a str>,
    /// How the edge is drawn.
    pub style: EdgeStyle,
}

/// Components keyed by name plus the edges between them.
///
/// Edges are unique per `(source, target)` pair, never loop back to their
/// source, and only ever reference existing nodes. Nothing is removed once
/// added, so node and edge indices follow insertion order.
#[derive(Debug, Clone, Default)]
pub struct ComponentGraph {
    graph: DiGraph<Component, EdgeData>,
    index: HashMap<String, NodeIndex>,
}

impl ComponentGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from components, materializing every resolvable declared dependency.
    ///
    /// Components with a duplicate name are ignored after the first.
    /// Dependencies on unknown components, or on the component itself, are
    /// kept on the component but produce no edge.
    #[must_use]
    pub fn from_components(components: Vec<Component>) -> Self {
        let mut graph = Self::new();
        for component in components {
            graph.insert(component);
        }
        let declared: Vec<(String, String, Option<String>)> = graph
            .components()
            .flat_map(|c| {
                c.dependencies.iter().map(|dep| {
                    (c.name.clone(), dep.clone(), c.dependency_details.get(dep).cloned())
                })
            })
            .collect();
        for (source, target, label) in declared {
            let label = label.filter(|l| !l.trim().is_empty());
            graph.add_edge(&source, &target, label, EdgeStyle::Solid);
        }
        graph
    }

    /// Inserts a component; returns `false` if the name was already taken.
    pub fn insert(&mut self, component: Component) -> bool {
        if self.contains(&component.name) {
            return false;
        }
        let name = component.name.clone();
        let idx = self.graph.add_node(component);
        self.index.insert(name, idx);
        true
    }

    /// Returns `true` if a component with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a component by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.index.get(name).map(|&idx| &self.graph[idx])
    }

    /// Components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &Component> + '_ {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<'_>> {
        self.graph
            .edge_references()
            .map(|e| Edge {
                source: &self.graph[e.source()].name,
                target: &self.graph[e.target()].name,
                label: e.weight().label.as_deref(),
                style: e.weight().style,
            })
            .collect()
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns `true` if the graph has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the edge `source -> target` exists.
    #[must_use]
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Adds an edge if both endpoints exist, it is not a self-loop, and it is new.
    ///
    /// Returns `true` only when an edge was actually added.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        label: Option<String>,
        style: EdgeStyle,
    ) -> bool {
        if source == target {
            debug!("dropping self-dependency of {source}");
            return false;
        }
        let (Some(&a), Some(&b)) = (self.index.get(source), self.index.get(target)) else {
            debug!("dropping dangling edge {source} -> {target}");
            return false;
        };
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, EdgeData { label, style });
        true
    }
}

impl PartialEq for ComponentGraph {
    fn eq(&self, other: &Self) -> bool {
        self.components().eq(other.components()) && self.edges() == other.edges()
    }
}

impl Eq for ComponentGraph {}
