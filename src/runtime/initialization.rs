//! # Initialization
//!
//! Tracing subscriber setup for the command-line tools.
//!
//! Logs are written to stderr so that stdout only carries the user-facing result
//! (the validation report or the inflation summary).

use crate::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the default filter is used, raised to
/// `debug` when `verbose` is requested.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    // try_init: a subscriber may already be installed by a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
