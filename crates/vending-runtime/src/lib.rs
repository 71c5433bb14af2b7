//! # vending-runtime: Process Shell for a Vending Machine
//!
//! Everything the pure core refuses to do: read configuration from disk and
//! environment, install a log subscriber, and stock a machine with a sample
//! catalogue for development.
//!
//! ## Startup Sequence
//! 1. Load [`RuntimeConfig`] (defaults → machine.toml → environment)
//! 2. Initialize tracing from the `[logging]` section
//! 3. Build the [`Machine`](vending_core::Machine) grid
//! 4. Optionally stock it from the [`catalog`]

pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{LoggingSettings, MachineSettings, RuntimeConfig};
pub use error::{RuntimeError, RuntimeResult};
pub use telemetry::init_tracing;
