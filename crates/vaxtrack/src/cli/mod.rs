//! CLI functionality for the vaxtrack tool
//!
//! This module contains all CLI-related functionality including:
//! - Daily reports
//! - Snapshot summaries
//! - Data validation
//! - Output formatting

#[cfg(feature = "cli")]
pub mod output;
#[cfg(feature = "cli")]
pub mod report;
#[cfg(feature = "cli")]
pub mod summary;
#[cfg(feature = "cli")]
pub mod validate;
