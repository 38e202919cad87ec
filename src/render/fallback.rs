//! Hand-written SVG documents used when the layout engine cannot be.
//!
//! Both generators are plain string formatting and cannot fail.

use std::fmt::Write as _;

use crate::graph::ComponentGraph;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// Escapes `&`, `<` and `>` for use in SVG text content.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Returns `true` if `text` looks like an SVG document.
///
/// Leading whitespace is ignored; the document must open with an XML
/// declaration or the `<svg` root element and contain an `<svg` element.
#[must_use]
pub fn is_svg(text: &str) -> bool {
    let head = text.trim_start();
    (head.starts_with("<?xml") || head.starts_with("<svg")) && head.contains("<svg")
}

/// Lists every drawn component with its file count, one line each.
///
/// The heuristic catch-all component is left out.
#[must_use]
pub fn minimal_svg(graph: &ComponentGraph, repo: &str) -> String {
    let components: Vec<_> = graph.components().filter(|c| !c.is_implicit_root()).collect();
    let count = components.len();
    let height = (50 + count * 20 + 50).max(300);

    let mut lines = String::new();
    for (i, component) in components.iter().enumerate() {
        let _ = writeln!(
            lines,
            r#"  <text x="50" y="{}" font-size="14">{} ({} files)</text>"#,
            50 + i * 20,
            escape_xml(&component.name),
            component.files.len()
        );
    }
    if lines.is_empty() {
        lines.push_str(
            "  <text x=\"50\" y=\"50\" font-size=\"14\">No major components identified</text>\n",
        );
    }

    format!(
        r##"{XML_HEADER}
<svg width="800" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="#f0f0f0"></rect>
  <text x="50" y="30" font-size="18" font-weight="bold">Architecture of {repo}</text>
{lines}  <text x="50" y="{note_y}" font-size="14" fill="#666">Note: This is a simplified diagram showing important components only</text>
</svg>"##,
        repo = escape_xml(repo),
        note_y = 50 + count.max(1) * 20 + 30,
    )
}

/// Renders an error message in a fixed layout.
#[must_use]
pub fn error_svg(repo: &str, message: &str) -> String {
    format!(
        r##"{XML_HEADER}
<svg width="800" height="250" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="#fff0f0"></rect>
  <text x="50" y="30" font-size="18" font-weight="bold">Architecture of {repo}</text>
  <text x="50" y="70" font-size="14" fill="#cc0000">Error generating architecture:</text>
  <text x="50" y="100" font-size="12" fill="#666">{message}</text>
  <text x="50" y="150" font-size="14">Please try another repository or check the logs</text>
  <text x="50" y="180" font-size="14">For large projects, the architecture diagram shows only key components</text>
</svg>"##,
        repo = escape_xml(repo),
        message = escape_xml(message),
    )
}
