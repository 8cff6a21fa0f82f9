//! Report command implementation

use super::output;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde_json::Value;
use std::path::PathBuf;
use vaxtrack_engine::{DailyReport, Snapshot};
use vaxtrack_loader::{DataSources, load_snapshot};
use vaxtrack_types::parse_query_time;

/// Configuration for report command
pub struct ReportConfig {
    pub sources: DataSources,
    /// Query instant as typed by the user
    pub at: String,
    pub days: u32,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Print daily reports for the configured data
pub fn report(config: ReportConfig) -> Result<()> {
    if config.days == 0 {
        anyhow::bail!("--days must be at least 1");
    }
    let t = parse_query_time(&config.at)
        .with_context(|| format!("Invalid query time: {}", config.at))?;
    log::debug!("reporting {} day(s) from {}", config.days, t);

    if config.verbose {
        eprintln!("Loading data:");
        for path in &config.sources.bottle_files {
            eprintln!("  - {}", path.display());
        }
        eprintln!("  - {}", config.sources.administration_file.display());
    }

    let snapshot = load_snapshot(&config.sources).context("Failed to load data")?;

    if config.verbose {
        eprintln!(
            "Loaded {} bottles and {} administrations",
            snapshot.inventory().len(),
            snapshot.administrations().len()
        );
    }

    let unlinked = snapshot.administrations().unlinked_count();
    if unlinked > 0 {
        eprintln!(
            "{}",
            output::format_warning(&format!(
                "{} administration(s) refer to unknown bottles and are not counted",
                unlinked
            ))
        );
    }

    let value = reports_json(&snapshot, t, config.days)?;
    let format = output::OutputFormat::parse(config.output_format.as_deref().unwrap_or("pretty"));
    output::print_output(&value, format, config.output_file.as_deref())
}

/// One report object for a single day, an array for several
pub fn reports_json(snapshot: &Snapshot, t: NaiveDateTime, days: u32) -> Result<Value> {
    let value = if days == 1 {
        serde_json::to_value(DailyReport::build(snapshot, t))
    } else {
        serde_json::to_value(DailyReport::series(snapshot, t, days))
    };
    value.context("Failed to serialize report")
}
