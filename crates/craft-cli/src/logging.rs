//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured filter. Logs go to stderr so that
//! command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(default_filter: &str, json: bool) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
