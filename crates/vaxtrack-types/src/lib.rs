//! vaxtrack entity model
//!
//! This crate defines the leaf entities of the inventory and the time policy
//! that derives their state:
//! - Bottles and their expiration / expiring-soon / remaining-dose math
//! - Dose administration events
//! - Manufacturers, genders and healthcare districts
//! - Timestamp normalization for source records and query times

pub mod bottle;
pub mod district;
pub mod dose;
pub mod manufacturer;
pub mod timestamp;
pub mod window;

pub use bottle::{Bottle, ExpiringDoses};
pub use district::District;
pub use dose::{Dose, Gender};
pub use manufacturer::Manufacturer;
pub use timestamp::{normalize_timestamp, parse_query_time, parse_timestamp};
