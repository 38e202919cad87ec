//! Records port interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use super::format::{Cassette, Interaction};

/// Accumulates interactions and writes them as a YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    location: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Creates a recorder that will write to `path` on [`finish`](Self::finish).
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            location: location.into(),
            interactions: Vec::new(),
        }
    }

    /// Records an interaction; the sequence number is assigned here.
    pub fn record(&mut self, port: &str, method: &str, input: Value, output: Value) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.to_string(),
            method: method.to_string(),
            input,
            output,
        });
    }

    /// Records a fallible call using the `{"Ok": v}` / `{"Err": msg}` convention.
    ///
    /// Values that fail to serialize are stored as `null` rather than lost.
    pub fn record_result<I, T, E>(&mut self, port: &str, method: &str, input: &I, result: &Result<T, E>)
    where
        I: Serialize,
        T: Serialize,
        E: std::fmt::Display,
    {
        let input = serde_json::to_value(input).unwrap_or(Value::Null);
        let output = match result {
            Ok(value) => json!({ "Ok": serde_json::to_value(value).unwrap_or(Value::Null) }),
            Err(e) => json!({ "Err": e.to_string() }),
        };
        self.record(port, method, input, output);
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    /// Writes the cassette to disk and returns its path.
    ///
    /// The recorded interactions are moved out; a second call writes an
    /// empty cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be produced or written.
    pub fn finish(&mut self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            location: self.location.clone(),
            interactions: std::mem::take(&mut self.interactions),
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_results_and_writes_yaml() {
        let dir = std::env::temp_dir().join("archsketch_recorder_test");
        let path = dir.join("session.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "session", "https://github.com/a/b");
        let ok: Result<&str, String> = Ok("<svg/>");
        let err: Result<&str, String> = Err("dot missing".into());
        recorder.record_result("layout", "layout", &json!({"dot": "digraph {}"}), &ok);
        recorder.record_result("layout", "layout", &json!({"dot": "digraph {}"}), &err);
        assert_eq!(recorder.interaction_count(), 2);

        let written = recorder.finish().unwrap();
        let cassette = Cassette::load(&written).unwrap();

        assert_eq!(cassette.name, "session");
        assert_eq!(cassette.interactions[0].seq, 0);
        assert_eq!(cassette.interactions[0].output, json!({"Ok": "<svg/>"}));
        assert_eq!(cassette.interactions[1].seq, 1);
        assert_eq!(cassette.interactions[1].output, json!({"Err": "dot missing"}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
