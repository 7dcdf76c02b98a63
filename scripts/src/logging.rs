//! Logging setup shared by the script binaries

use std::io;

use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

/// Install the global tracing subscriber.
///
/// Logs go to stderr, stdout is reserved for the deployment results. The
/// filter is read from `RUST_LOG`, falling back to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
