//! # Seed Machine
//!
//! Builds a machine from configuration, fills it from the sample catalogue
//! and logs the resulting inventory as JSON.
//!
//! ## Usage
//! ```bash
//! # Default config location, 5 units per slot
//! cargo run -p vending-runtime --bin seed
//!
//! # Custom config and stock depth
//! cargo run -p vending-runtime --bin seed -- --config ./machine.toml --units 10
//! ```

use std::env;
use std::path::PathBuf;

use chrono::Utc;
use tracing::{error, info};
use vending_runtime::catalog::stock_machine;
use vending_runtime::{init_tracing, RuntimeConfig, RuntimeResult};

const DEFAULT_UNITS: usize = 5;

fn main() {
    if let Err(e) = run() {
        error!(error = %e, "Seeding failed");
        eprintln!("seed: {e}");
        std::process::exit(1);
    }
}

fn run() -> RuntimeResult<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = flag_value(&args, "--config").map(PathBuf::from);
    let units = flag_value(&args, "--units")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_UNITS);

    let config = RuntimeConfig::load(config_path)?;
    init_tracing(&config.logging);

    let mut machine = config.build_machine()?;
    let added = stock_machine(&mut machine, units, Utc::now().date_naive())?;

    let inventory = machine.inventory();
    let json = serde_json::to_string_pretty(&inventory)
        .unwrap_or_else(|e| format!("<unserializable inventory: {e}>"));
    info!(machine = %machine.id(), units = added, "Seeding complete");
    println!("{json}");

    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
