//! On-disk cassette layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call to a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, starting at zero.
    pub seq: u64,
    /// Port name (`"llm"` or `"layout"`).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// What was sent to the port.
    pub input: serde_json::Value,
    /// What came back: `{"Ok": value}` or `{"Err": message}`.
    pub output: serde_json::Value,
}

/// A recorded diagram session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Repository location the session analyzed.
    pub location: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a YAML cassette from disk.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_reads_yaml_written_by_hand() {
        let dir = std::env::temp_dir().join("archsketch_cassette_format_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hand.cassette.yaml");
        std::fs::write(
            &path,
            "name: hand\nrecorded_at: 2025-06-15T10:00:00Z\nlocation: https://github.com/a/b\n\
             interactions:\n  - seq: 0\n    port: layout\n    method: layout\n    \
             input: {dot: 'digraph {}'}\n    output: {Ok: '<svg/>'}\n",
        )
        .unwrap();

        let cassette = Cassette::load(&path).unwrap();

        assert_eq!(cassette.location, "https://github.com/a/b");
        assert_eq!(cassette.interactions[0].output, json!({"Ok": "<svg/>"}));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Cassette::load(std::path::Path::new("/no/such/cassette.yaml")).unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }
}
