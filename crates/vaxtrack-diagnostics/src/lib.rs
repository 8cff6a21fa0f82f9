//! vaxtrack diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the loader,
//! the engine and the command-line tool, including error codes, record
//! locations and diagnostic reporting.

mod error;
mod error_code;
mod location;

pub use error::*;
pub use error_code::*;
pub use location::*;

/// Result type for vaxtrack operations
pub type Result<T> = std::result::Result<T, VaxError>;
