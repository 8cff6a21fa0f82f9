//! vaxtrack query engine
//!
//! This crate answers questions about a fixed snapshot of bottles and dose
//! administrations as of an arbitrary query instant:
//!
//! - **Arrivals**: bottles and doses arriving on a date, per manufacturer
//! - **Expirations**: bottles expiring on a day, doses written off by a time
//! - **Supply**: doses remaining, doses expiring within 10 days, per district
//! - **Administrations**: doses given on a date
//!
//! # Example
//!
//! ```ignore
//! use vaxtrack_engine::{AdministrationLog, Inventory, Snapshot};
//!
//! let mut inventory = Inventory::from_bottles(bottles);
//! let log = AdministrationLog::link(doses, &mut inventory);
//! let snapshot = Snapshot::new(inventory, log);
//!
//! let left = snapshot.inventory().total_doses_remaining(t);
//! ```
//!
//! # Snapshot lifecycle
//!
//! Linking doses into bottles is the only mutation and it requires
//! `&mut Inventory`. Once a [`Snapshot`] is built every query takes `&self`,
//! so a snapshot can be shared between threads without locking.

pub mod administration;
pub mod integrity;
pub mod inventory;
pub mod report;
pub mod snapshot;

pub use administration::AdministrationLog;
pub use integrity::check_integrity;
pub use inventory::{Inventory, ManufacturerArrivals};
pub use report::DailyReport;
pub use snapshot::Snapshot;
