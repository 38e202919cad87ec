//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::Settings;

/// Top-level CLI parser for `archsketch`.
#[derive(Debug, Parser)]
#[command(name = "archsketch", version, about = "Sketch the architecture of a repository")]
pub struct Cli {
    /// Shared settings (models, timeouts, layout engine).
    #[command(flatten)]
    pub settings: Settings,

    /// Log more detail to stderr (repeat for trace output).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render an SVG architecture diagram.
    Diagram {
        /// Repository URL or local directory.
        location: String,
        /// Read the structure listing from this file instead of fetching it.
        #[arg(long)]
        structure_file: Option<PathBuf>,
        /// Write the SVG here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Skip the model and derive components from the listing alone.
        #[arg(long)]
        heuristic_only: bool,
    },
    /// Write a prose summary of the architecture.
    Summarize {
        /// Repository URL or local directory.
        location: String,
        /// Focus the summary on one module.
        #[arg(long)]
        module: Option<String>,
        /// Read the structure listing from this file instead of fetching it.
        #[arg(long)]
        structure_file: Option<PathBuf>,
    },
    /// Print the structure listing the other commands work from.
    Structure {
        /// Repository URL or local directory.
        location: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_diagram_with_options() {
        let cli = Cli::parse_from([
            "archsketch",
            "diagram",
            "https://github.com/a/b",
            "--out",
            "b.svg",
            "--heuristic-only",
            "--layout-timeout-secs",
            "5",
        ]);
        match cli.command {
            Command::Diagram { location, out, heuristic_only, structure_file } => {
                assert_eq!(location, "https://github.com/a/b");
                assert_eq!(out.unwrap().to_str(), Some("b.svg"));
                assert!(heuristic_only);
                assert!(structure_file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.settings.layout_timeout_secs, 5);
    }

    #[test]
    fn parses_summarize_drill_down() {
        let cli = Cli::parse_from(["archsketch", "-vv", "summarize", "repo", "--module", "api"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Summarize { ref module, .. } if module.as_deref() == Some("api")
        ));
    }

    #[test]
    fn settings_default_without_flags() {
        let cli = Cli::parse_from(["archsketch", "structure", "."]);
        assert!(matches!(cli.command, Command::Structure { .. }));
        assert_eq!(cli.settings.dot_binary, "dot");
    }

    #[test]
    fn location_is_required() {
        assert!(Cli::try_parse_from(["archsketch", "diagram"]).is_err());
    }
}
