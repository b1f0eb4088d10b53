//! Log subscriber setup
//!
//! Logs go to stderr so stdout carries results only. `RUST_LOG` wins over
//! the verbosity flags when set.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the log filter for a verbosity, preferring `RUST_LOG`
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global fmt subscriber. A second call is a no-op.
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
