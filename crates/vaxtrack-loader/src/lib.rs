//! Record loading for vaxtrack
//!
//! Bottles and administrations arrive as line-delimited JSON. This crate
//! decodes each line into a typed record, validates it and builds the engine's
//! [`Inventory`](vaxtrack_engine::Inventory) and
//! [`AdministrationLog`](vaxtrack_engine::AdministrationLog).
//!
//! # Example
//!
//! ```ignore
//! use vaxtrack_loader::{DataSources, load_snapshot};
//!
//! let snapshot = load_snapshot(&DataSources::in_dir("resources"))?;
//! println!("{} bottles", snapshot.inventory().len());
//! ```

pub mod load;
pub mod record;
pub mod sources;

pub use load::{load_administration_log, load_inventory, load_snapshot, read_bottles, read_doses};
pub use record::{BottleRecord, DoseRecord, Record};
pub use sources::{ADMINISTRATION_FILE, BOTTLE_FILES, DATA_DIR_ENV, DEFAULT_DATA_DIR, DataSources};
