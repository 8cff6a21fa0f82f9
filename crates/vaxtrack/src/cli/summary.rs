//! Summary command implementation

use super::output;
use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::path::PathBuf;
use vaxtrack_engine::Snapshot;
use vaxtrack_loader::{DataSources, load_snapshot};

/// Configuration for summary command
pub struct SummaryConfig {
    pub sources: DataSources,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Print what was loaded, independent of any query time
pub fn summary(config: SummaryConfig) -> Result<()> {
    let snapshot = load_snapshot(&config.sources).context("Failed to load data")?;
    if config.verbose {
        eprintln!("Data loaded from {} bottle file(s)", config.sources.bottle_files.len());
    }

    let value = summary_json(&snapshot);
    let format = output::OutputFormat::parse(config.output_format.as_deref().unwrap_or("pretty"));
    output::print_output(&value, format, config.output_file.as_deref())
}

pub fn summary_json(snapshot: &Snapshot) -> Value {
    let inventory = snapshot.inventory();
    let administrations = snapshot.administrations();
    let capacity: u64 = inventory.iter().map(|b| u64::from(b.injections())).sum();
    let first_arrival = inventory.iter().map(|b| b.arrived()).min();
    let last_arrival = inventory.iter().map(|b| b.arrived()).max();

    json!({
        "bottles": inventory.len(),
        "doseCapacity": capacity,
        "administrations": administrations.len(),
        "unlinkedAdministrations": administrations.unlinked_count(),
        "bottlesByManufacturer": inventory.bottles_by_manufacturer(),
        "firstArrival": first_arrival,
        "lastArrival": last_arrival,
    })
}
