//! Live layout engine running Graphviz `dot` as a child process.

use std::error::Error;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::ports::layout::{LayoutEngine, LayoutFuture};

/// Pipes DOT source through `<binary> -Tsvg`.
pub struct GraphvizLayout {
    binary: String,
}

impl GraphvizLayout {
    /// Creates a layout engine invoking `binary`.
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into() }
    }
}

impl GraphvizLayout {
    async fn run(&self, dot: String) -> Result<String, Box<dyn Error + Send + Sync>> {
        let mut child = Command::new(&self.binary)
            .arg("-Tsvg")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("failed to start {}: {e}", self.binary))?;

        if let Some(mut stdin) = child.stdin.take() {
            // The engine may exit before reading; its status tells the story.
            if let Err(e) = stdin.write_all(dot.as_bytes()).await {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl LayoutEngine for GraphvizLayout {
    fn layout(&self, dot: &str) -> LayoutFuture<'_> {
        Box::pin(self.run(dot.to_string()))
    }
}
