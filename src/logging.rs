//! Console logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "media_shelf=info";

/// Install the global `tracing` subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
