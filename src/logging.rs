//! Tracing subscriber setup for the `tmos` binary
//!
//! Logs go to stderr so stdout stays clean for file contents. `RUST_LOG`
//! takes precedence over the configured filter.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
