//! Vaccine inventory tracking for Rust
//!
//! This crate bundles the vaxtrack workspace:
//! - Bottle and dose entities with the 30 day expiration policy
//! - Inventory and administration queries as of any instant
//! - Loading of line-delimited JSON record files
//! - Daily reports and data integrity checks
//!
//! # Example
//!
//! ```ignore
//! use vaxtrack::{DailyReport, DataSources, load_snapshot, parse_query_time};
//!
//! let snapshot = load_snapshot(&DataSources::in_dir("resources"))?;
//! let t = parse_query_time("2021-04-12T11:10:06.473587Z")?;
//! let report = DailyReport::build(&snapshot, t);
//! println!("{} doses expired by then", report.total_doses_expired_by);
//! ```

// Re-export all public APIs from internal crates
pub use vaxtrack_diagnostics as diagnostics;
pub use vaxtrack_engine as engine;
pub use vaxtrack_loader as loader;
pub use vaxtrack_types as types;

// Convenience re-exports
pub use vaxtrack_diagnostics::{Diagnostic, Result, VaxError};
pub use vaxtrack_engine::{AdministrationLog, DailyReport, Inventory, Snapshot};
pub use vaxtrack_loader::{DataSources, load_administration_log, load_inventory, load_snapshot};
pub use vaxtrack_types::{Bottle, Dose, Manufacturer, parse_query_time};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
