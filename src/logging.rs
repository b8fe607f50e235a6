//! Logging setup
//!
//! Installs a `tracing` stderr subscriber. The default directive keeps
//! Searchpad's own events at `info`; `RUST_LOG` overrides it.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Safe to call once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("searchpad=info"));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
