//! Serves recorded interactions back, in order, per port and method.

use std::collections::{HashMap, VecDeque};

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::format::{Cassette, Interaction};

/// Replays a cassette's interactions.
///
/// Each `(port, method)` pair has its own queue, so interleaving between
/// ports does not have to match the recording.
#[derive(Debug, Default)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Indexes the cassette's interactions by port and method.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Takes the next recorded interaction for `port`/`method`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the pair when none remain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<Interaction, String> {
        self.queues
            .get_mut(&(port.to_string(), method.to_string()))
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| format!("cassette exhausted for {port}::{method}"))
    }

    /// Takes the next interaction and decodes its `Ok`/`Err` output.
    ///
    /// # Errors
    ///
    /// Returns the recorded error message, an exhaustion error, or a decode error.
    pub fn next_result<T: DeserializeOwned>(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<T, String> {
        let interaction = self.next_interaction(port, method)?;
        decode_result(interaction.output)
    }
}

fn decode_result<T: DeserializeOwned>(output: Value) -> Result<T, String> {
    match output {
        Value::Object(mut map) => {
            if let Some(err) = map.remove("Err") {
                return Err(err.as_str().map_or_else(|| err.to_string(), str::to_string));
            }
            let ok = map.remove("Ok").ok_or("recorded output has neither Ok nor Err")?;
            serde_json::from_value(ok).map_err(|e| format!("recorded output does not decode: {e}"))
        }
        other => Err(format!("recorded output is not an Ok/Err object: {other}")),
    }
}
