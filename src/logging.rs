//! Logging configuration
//!
//! Diagnostics go to stderr through `tracing`, separate from the console UI
//! and from NDJSON on stdout.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map `-v` occurrences to a level: warn, info, debug, trace.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: u8) -> String {
    let level = level_for_verbosity(verbose).to_string().to_lowercase();
    format!("deploywatch={level}")
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
