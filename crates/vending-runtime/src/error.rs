//! # Runtime Error Types
//!
//! Errors raised around the core: reading and writing configuration, and
//! whatever the core itself rejects while a machine is being built.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::Error ────────┐                                               │
//! │  toml::de::Error ───────┤                                               │
//! │  toml::ser::Error ──────┼──► RuntimeError (this module)                 │
//! │  VendingError ──────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use vending_core::VendingError;

/// Errors from the runtime shell.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Reading or writing the config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`RuntimeConfig`](crate::config::RuntimeConfig).
    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The config could not be written as TOML.
    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A config value is out of range or missing.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No config path was given and no platform default exists.
    #[error("No config path available")]
    NoConfigPath,

    /// The core rejected an operation.
    #[error(transparent)]
    Vending(#[from] VendingError),
}

/// Convenience type alias for Results with RuntimeError.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use vending_core::ValidationError;

    #[test]
    fn test_error_messages() {
        let err = RuntimeError::InvalidConfig("rows must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: rows must be greater than 0"
        );
    }

    #[test]
    fn test_vending_error_is_transparent() {
        let core: VendingError = ValidationError::Required {
            field: "machine id".into(),
        }
        .into();
        let err: RuntimeError = core.into();
        assert_eq!(err.to_string(), "Validation error: machine id is required");
    }
}
