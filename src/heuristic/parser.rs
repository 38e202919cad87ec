//! Keyword-driven attribution of listed files to component categories.

use std::path::Path;

use tracing::debug;

use crate::graph::{Component, ComponentGraph, ROOT};
use crate::structure::StructureListing;

/// Category assigned to data-access code and used as its synthetic dependency.
pub const DATABASE: &str = "database";

/// Directory-name keywords per category, checked in order; the first match wins.
pub const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    ("frontend", &["web", "ui", "frontend", "client", "react", "vue", "angular", "html"]),
    ("backend", &["api", "server", "backend", "service", "controller"]),
    (DATABASE, &["db", "database", "model", "entity", "repository"]),
    ("utils", &["util", "helper", "common", "lib"]),
    ("tests", &["test", "spec", "mock"]),
    ("config", &["config", "settings", "env"]),
    ("docs", &["doc", "documentation", "readme", "wiki"]),
];

/// Directories whose contents never describe the architecture.
const NOISE_DIRS: &[&str] =
    &["node_modules", ".git", "__pycache__", "venv", "env", ".vscode", ".idea"];

/// Extensions of files that can carry data-access code.
const CODE_EXTENSIONS: &[&str] = &["py", "js", "ts", "java", "go", "rb"];

/// File-name fragments that mark data-access code.
const DATA_ACCESS_KEYWORDS: &[&str] = &["db", "dao", "repository", "model"];

/// Returns the category for a lowercase directory name.
///
/// Falls back to the name itself, so unrecognized directories become their
/// own components.
#[must_use]
pub fn categorize(dir_name: &str) -> String {
    CATEGORY_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| dir_name.contains(k)))
        .map_or_else(|| dir_name.to_string(), |(category, _)| (*category).to_string())
}

/// Returns `true` for code files whose name suggests database access.
#[must_use]
pub fn is_data_access(file_name: &str) -> bool {
    let is_code = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CODE_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c)));
    let lower = file_name.to_lowercase();
    is_code && DATA_ACCESS_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Parses an indented structure listing into a heuristic component graph.
///
/// Every file belongs to the category of the nearest enclosing directory
/// that is still open, or to [`ROOT`]. Categories without files are dropped,
/// except [`ROOT`] and [`DATABASE`] when some component depends on it.
#[must_use]
pub fn parse(structure: &str) -> ComponentGraph {
    let listing = StructureListing::parse(structure);

    let mut components = vec![Component::heuristic(ROOT)];
    let mut stack: Vec<(usize, String)> = Vec::new();
    let mut muted_below: Option<usize> = None;

    for entry in &listing.entries {
        if let Some(level) = muted_below {
            if entry.indent > level {
                continue;
            }
            muted_below = None;
        }

        while stack.last().is_some_and(|(indent, _)| *indent >= entry.indent) {
            stack.pop();
        }

        if entry.is_dir {
            let dir_name = entry.name.to_lowercase();
            if NOISE_DIRS.contains(&dir_name.as_str()) {
                muted_below = Some(entry.indent);
                continue;
            }
            let category = categorize(&dir_name);
            component_mut(&mut components, &category);
            stack.push((entry.indent, category));
        } else {
            let owner = stack.last().map_or(ROOT, |(_, category)| category.as_str());
            let component = component_mut(&mut components, owner);
            component.files.insert(entry.name.clone());
            if is_data_access(&entry.name) {
                component.add_dependency(DATABASE);
            }
        }
    }

    let database_referenced =
        components.iter().any(|c| c.dependencies.iter().any(|d| d == DATABASE));
    if database_referenced {
        component_mut(&mut components, DATABASE);
    }
    components.retain(|c| {
        c.name == ROOT || !c.files.is_empty() || (database_referenced && c.name == DATABASE)
    });

    debug!("heuristic parse found {} components", components.len());
    ComponentGraph::from_components(components)
}

fn component_mut<'a>(components: &'a mut Vec<Component>, name: &str) -> &'a mut Component {
    let index = match components.iter().position(|c| c.name == name) {
        Some(index) => index,
        None => {
            components.push(Component::heuristic(name));
            components.len() - 1
        }
    };
    &mut components[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(graph: &ComponentGraph, name: &str) -> Vec<String> {
        graph.get(name).map(|c| c.files.iter().cloned().collect()).unwrap_or_default()
    }

    #[test]
    fn categories_follow_table_priority() {
        assert_eq!(categorize("webapi"), "frontend");
        assert_eq!(categorize("api"), "backend");
        assert_eq!(categorize("models"), "database");
        assert_eq!(categorize("libs"), "utils");
        assert_eq!(categorize("specs"), "tests");
        assert_eq!(categorize("settings"), "config");
        assert_eq!(categorize("docs"), "docs");
        assert_eq!(categorize("chaincode"), "chaincode");
    }

    #[test]
    fn attributes_files_to_enclosing_directory() {
        let graph = parse("README.md\nsrc/\n    main.py\n    ui/\n        app.js\n    cli.py\ntests/\n    test_main.py\n");

        assert_eq!(files(&graph, ROOT), vec!["README.md"]);
        assert_eq!(files(&graph, "src"), vec!["cli.py", "main.py"]);
        assert_eq!(files(&graph, "frontend"), vec!["app.js"]);
        assert_eq!(files(&graph, "tests"), vec!["test_main.py"]);
    }

    #[test]
    fn sibling_file_after_directory_belongs_to_parent() {
        let graph = parse("src/\n    main.py\nsetup.py\n");
        assert_eq!(files(&graph, ROOT), vec!["setup.py"]);
    }

    #[test]
    fn data_access_file_adds_single_database_edge() {
        let graph = parse("backend/\n    user_repository.py\n    order_repository.py\n");

        let backend = graph.get("backend").unwrap();
        assert_eq!(backend.dependencies, vec![DATABASE.to_string()]);
        assert!(graph.contains(DATABASE));
        let edges: Vec<_> = graph
            .edges()
            .into_iter()
            .filter(|e| e.source == "backend" && e.target == DATABASE)
            .collect();
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn non_code_files_do_not_add_database_dependency() {
        let graph = parse("backend/\n    models.md\n    server.py\n");
        assert!(graph.get("backend").unwrap().dependencies.is_empty());
        assert!(!graph.contains(DATABASE));
    }

    #[test]
    fn noise_directories_and_their_contents_are_skipped() {
        let graph = parse("app/\n    node_modules/\n        index.js\n    main.js\n.git/\n    HEAD\n");

        assert_eq!(files(&graph, "app"), vec!["main.js"]);
        assert!(!graph.contains("node_modules"));
        assert!(files(&graph, ROOT).is_empty());
    }

    #[test]
    fn empty_categories_are_dropped_but_root_stays() {
        let graph = parse("docs/\nlib/\n    helpers.rs\n");
        assert!(graph.contains(ROOT));
        assert!(!graph.contains("docs"));
        assert!(graph.contains("utils"));
    }

    #[test]
    fn inconsistent_indentation_does_not_panic() {
        let graph = parse("        deep.py\nsrc/\n            jumped.py\n  odd.py\n\tweb/\n\t\tpage.html\n");
        assert_eq!(files(&graph, ROOT), vec!["deep.py"]);
        assert_eq!(files(&graph, "src"), vec!["jumped.py", "odd.py"]);
        assert_eq!(files(&graph, "frontend"), vec!["page.html"]);
    }

    #[test]
    fn empty_input_yields_root_only() {
        let graph = parse("");
        assert_eq!(graph.len(), 1);
        assert!(graph.contains(ROOT));
    }
}
