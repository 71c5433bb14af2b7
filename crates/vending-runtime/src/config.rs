//! # Machine Configuration
//!
//! Configuration for one vending machine process.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VENDING_MACHINE_ID=vm-lobby                                        │
//! │     VENDING_COLUMNS=6   VENDING_ROWS=8   VENDING_LOG=debug             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/fleet/machine.toml (Linux)                               │
//! │     ~/Library/Application Support/com.vending.fleet/machine.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     4 columns × 6 rows, generated machine id                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # machine.toml
//! [machine]
//! id = "vm-lobby"
//! columns = 4
//! rows = 6
//! operative = true
//!
//! [logging]
//! filter = "info,vending=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use uuid::Uuid;
use vending_core::validation::MAX_COLUMNS;
use vending_core::Machine;

use crate::error::{RuntimeError, RuntimeResult};

// =============================================================================
// Machine Settings
// =============================================================================

/// Shape and identity of the machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Machine identifier.
    /// Auto-generated (UUID v4) if not provided.
    #[serde(default = "default_machine_id")]
    pub id: String,

    /// Number of lettered columns (1-26).
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Number of numbered rows (>= 1).
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Whether the machine starts in service.
    #[serde(default = "default_true")]
    pub operative: bool,
}

fn default_machine_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_columns() -> usize {
    4
}

fn default_rows() -> usize {
    6
}

fn default_true() -> bool {
    true
}

impl Default for MachineSettings {
    fn default() -> Self {
        MachineSettings {
            id: default_machine_id(),
            columns: default_columns(),
            rows: default_rows(),
            operative: true,
        }
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info,vending=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub machine: MachineSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl RuntimeConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (machine.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> RuntimeResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading machine config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> RuntimeResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(RuntimeError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Machine config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> RuntimeResult<()> {
        if self.machine.id.is_empty() {
            return Err(RuntimeError::InvalidConfig(
                "machine.id must not be empty".into(),
            ));
        }

        if self.machine.columns == 0 || self.machine.columns > MAX_COLUMNS {
            return Err(RuntimeError::InvalidConfig(format!(
                "machine.columns must be between 1 and {}, got {}",
                MAX_COLUMNS, self.machine.columns
            )));
        }

        if self.machine.rows == 0 {
            return Err(RuntimeError::InvalidConfig(
                "machine.rows must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Builds the empty machine described by this configuration.
    pub fn build_machine(&self) -> RuntimeResult<Machine> {
        let mut machine = Machine::new(
            self.machine.id.clone(),
            self.machine.columns,
            self.machine.rows,
        )?;
        if !self.machine.operative {
            machine.toggle_operative();
        }
        info!(
            machine = %machine.id(),
            columns = machine.columns(),
            rows = machine.rows(),
            operative = machine.is_operative(),
            "Machine built from config"
        );
        Ok(machine)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(id) = std::env::var("VENDING_MACHINE_ID") {
            debug!(machine_id = %id, "Overriding machine id from environment");
            self.machine.id = id;
        }

        if let Ok(columns) = std::env::var("VENDING_COLUMNS") {
            match columns.parse::<usize>() {
                Ok(c) => self.machine.columns = c,
                Err(_) => warn!(value = %columns, "Ignoring non-numeric VENDING_COLUMNS"),
            }
        }

        if let Ok(rows) = std::env::var("VENDING_ROWS") {
            match rows.parse::<usize>() {
                Ok(r) => self.machine.rows = r,
                Err(_) => warn!(value = %rows, "Ignoring non-numeric VENDING_ROWS"),
            }
        }

        if let Ok(filter) = std::env::var("VENDING_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "vending", "fleet")
            .map(|dirs| dirs.config_dir().join("machine.toml"))
    }
}
