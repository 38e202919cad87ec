//! Binary entrypoint for the `archsketch` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is fine; flags and the real environment still apply.
    let _ = dotenvy::dotenv();

    // Recording and replay are handled in commands::dispatch via
    // ARCHSKETCH_RECORD / ARCHSKETCH_REPLAY.
    match archsketch::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
