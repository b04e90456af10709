//! Diagnostic logging setup.
//!
//! Installs a global tracing subscriber writing to stderr, so stdout only
//! carries the user-facing summary.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing. Subsequent calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
