//! Diagnostic logging to stderr.
//!
//! Core emits metadata-only `tracing` events (positions, counts, sizes);
//! note text and the password never reach a log line.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "NOTES_LOG";

/// Install the global subscriber. `NOTES_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "notes=debug,notes_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
