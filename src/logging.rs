//! Logging setup for the TripSplit binary
//!
//! Library code only emits `tracing` events; the binary installs a
//! subscriber once at start-up. Output goes to stderr so table output on
//! stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "TRIPSPLIT_LOG";

/// Filter directive used when `--verbose` is passed
const VERBOSE_FILTER: &str = "tripsplit=debug";

/// Filter directive used when nothing else is configured
const DEFAULT_FILTER: &str = "warn";

/// Build the log filter for this run
///
/// `--verbose` wins over `TRIPSPLIT_LOG`, which wins over the default.
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
