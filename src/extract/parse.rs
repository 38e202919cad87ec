//! Strict parsing of the model's component list.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::ExtractError;
use crate::graph::{Component, Provenance};

/// One component as the model is instructed to describe it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentRecord {
    name: String,
    description: String,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    dependency_details: BTreeMap<String, String>,
}

/// Returns the JSON payload of a model response.
///
/// The content of the first fenced code block wins (an optional `json`
/// info string is dropped); without a complete fence the whole response is
/// the payload.
#[must_use]
pub fn locate_payload(raw: &str) -> &str {
    let Some(open) = raw.find("```") else {
        return raw.trim();
    };
    let after_fence = &raw[open + 3..];
    let body = after_fence.strip_prefix("json").unwrap_or(after_fence);
    match body.find("```") {
        Some(close) => body[..close].trim(),
        None => raw.trim(),
    }
}

/// Parses a model response into model-derived components.
///
/// # Errors
///
/// Returns [`ExtractError::Json`] if the payload is not a JSON array of
/// component records, and [`ExtractError::Schema`] if it is empty, a name is
/// blank, or a name repeats. Nothing is salvaged from a partially valid list.
pub fn parse_components(raw: &str) -> Result<Vec<Component>, ExtractError> {
    let records: Vec<ComponentRecord> = serde_json::from_str(locate_payload(raw))?;
    if records.is_empty() {
        return Err(ExtractError::Schema("component list is empty".into()));
    }

    let mut seen = BTreeSet::new();
    let mut components = Vec::with_capacity(records.len());
    for record in records {
        let name = record.name.trim().to_string();
        if name.is_empty() {
            return Err(ExtractError::Schema("component with blank name".into()));
        }
        if !seen.insert(name.clone()) {
            return Err(ExtractError::Schema(format!("duplicate component {name:?}")));
        }

        let mut component = Component {
            name,
            description: record.description.trim().to_string(),
            files: BTreeSet::new(),
            dependencies: Vec::new(),
            dependency_details: record.dependency_details,
            provenance: Provenance::Model,
        };
        for dependency in &record.dependencies {
            component.add_dependency(dependency.trim());
        }
        components.push(component);
    }
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_COMPONENTS: &str = r#"[
        {"name": "Web UI", "description": "React front end", "dependencies": ["API"],
         "dependency_details": {"API": "REST calls"}},
        {"name": "API", "description": "FastAPI service"}
    ]"#;

    #[test]
    fn prefers_fenced_block() {
        let raw = format!("Here you go:\n```json\n{TWO_COMPONENTS}\n```\nHope it helps.");
        assert!(locate_payload(&raw).starts_with('['));
        assert!(locate_payload(&raw).ends_with(']'));
    }

    #[test]
    fn bare_fence_without_language_tag() {
        assert_eq!(locate_payload("```\n[1]\n```"), "[1]");
    }

    #[test]
    fn unfenced_response_is_used_whole() {
        assert_eq!(locate_payload("  [1, 2]\n"), "[1, 2]");
    }

    #[test]
    fn parses_records_into_model_components() {
        let components = parse_components(TWO_COMPONENTS).unwrap();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0].name, "Web UI");
        assert_eq!(components[0].provenance, Provenance::Model);
        assert_eq!(components[0].dependencies, vec!["API".to_string()]);
        assert_eq!(components[0].dependency_details["API"], "REST calls");
        assert!(components[1].dependencies.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let raw = r#"[{"name": "A", "description": "a", "layer": "core"}]"#;
        assert!(matches!(parse_components(raw), Err(ExtractError::Json(_))));
    }

    #[test]
    fn rejects_missing_description() {
        let raw = r#"[{"name": "A"}]"#;
        assert!(matches!(parse_components(raw), Err(ExtractError::Json(_))));
    }

    #[test]
    fn rejects_empty_and_duplicate_lists() {
        assert!(matches!(parse_components("[]"), Err(ExtractError::Schema(_))));
        let dup = r#"[{"name": "A", "description": "a"}, {"name": "A", "description": "b"}]"#;
        assert!(matches!(parse_components(dup), Err(ExtractError::Schema(_))));
    }

    #[test]
    fn rejects_prose() {
        assert!(parse_components("I could not determine the components.").is_err());
    }
}
