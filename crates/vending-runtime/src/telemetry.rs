//! # Logging Setup
//!
//! Installs the process-wide tracing subscriber. The core only emits events;
//! this is the one place that decides where they go.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Builds the filter: `RUST_LOG` wins, then the configured directive.
///
/// An unparsable configured directive falls back to `info`.
pub fn build_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vending_core=trace` - Trace the core only
/// - Default: the `[logging] filter` from configuration
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing(settings: &LoggingSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .with_target(true)
        .try_init();
}
