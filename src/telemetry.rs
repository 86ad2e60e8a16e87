//! Structured logging set-up for the relay binary.
//!
//! Log levels are taken from `RUST_LOG` and default to `info`. Message
//! text is only emitted at `debug`, so the default level never records
//! what users wrote.

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the level filter from `RUST_LOG`, falling back to `info` when it
/// is unset or unparsable.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init()
}
