//! Command dispatch and handlers.

pub mod diagram;
pub mod structure;
pub mod summarize;

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::live::{source_for, ListingFileSource};
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::ports::source::StructureSource;
use crate::structure::RepoStructure;

/// Environment variable naming a cassette file to record into.
pub const RECORD_ENV: &str = "ARCHSKETCH_RECORD";
/// Environment variable naming a cassette file to replay from.
pub const REPLAY_ENV: &str = "ARCHSKETCH_REPLAY";

/// Dispatch a parsed command to its handler.
///
/// When `ARCHSKETCH_REPLAY` is set, model and layout calls are served from
/// that cassette. Otherwise, when `ARCHSKETCH_RECORD` is set, they run live
/// and are recorded to that file.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Command::Diagram { location, structure_file, out, heuristic_only } => {
            let ctx = context(&cli.settings, *heuristic_only, location)?;
            let structure = fetch_structure(location, structure_file.as_deref());
            block_on(diagram::run(&ctx, &cli.settings, location, &structure, out.as_deref()))?
        }
        Command::Summarize { location, module, structure_file } => {
            let ctx = context(&cli.settings, false, location)?;
            let structure = fetch_structure(location, structure_file.as_deref());
            block_on(summarize::run(&ctx, &cli.settings, location, &structure, module.as_deref()))?
        }
        Command::Structure { location } => structure::run(&fetch_structure(location, None)),
    }
}

/// Builds the service context for this invocation.
fn context(settings: &Settings, offline: bool, location: &str) -> Result<ServiceContext, String> {
    if let Ok(path) = env::var(REPLAY_ENV) {
        return ServiceContext::replaying(Path::new(&path));
    }
    if let Ok(path) = env::var(RECORD_ENV) {
        return Ok(ServiceContext::recording(settings, offline, &PathBuf::from(path), location));
    }
    Ok(if offline { ServiceContext::offline(settings) } else { ServiceContext::live(settings) })
}

/// Produces the structure for `location`, from `listing` when given.
fn fetch_structure(location: &str, listing: Option<&Path>) -> RepoStructure {
    let source: Box<dyn StructureSource> = match listing {
        Some(path) => Box::new(ListingFileSource::new(path)),
        None => source_for(location),
    };
    let structure = source.fetch(location);
    if let Err(e) = &structure {
        debug!("structure unavailable for {location}: {e}");
    }
    structure
}

/// Runs `future` to completion on a single-threaded runtime.
fn block_on<F: std::future::Future>(future: F) -> Result<F::Output, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    Ok(runtime.block_on(future))
}
