//! Logging System
//!
//! Supplementary tracing setup. User-facing report lines and preview output
//! go to stdout through the event sink; tracing diagnostics go to stderr so
//! the two never interleave in the report.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the filter defaults to `info`, or
/// `debug` when verbose is requested. Safe to call more than once; later
/// calls are no-ops.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
