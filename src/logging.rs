//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber, writing to stderr so stdout stays clean
/// for SVG and summaries.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the crate's level.
/// Installing twice is a no-op.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(verbosity).into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "archsketch=info",
        1 => "archsketch=debug",
        _ => "archsketch=trace",
    }
}
