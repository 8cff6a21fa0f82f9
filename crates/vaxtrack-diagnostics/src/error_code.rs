//! vaxtrack error codes following a structured numbering system
//!
//! Error code ranges:
//! - VAX0001-VAX0099: Record errors (malformed source records)
//! - VAX0100-VAX0199: Data integrity findings (consistent syntax, suspicious content)
//! - VAX0400-VAX0499: System errors (I/O, configuration)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a record error (0001-0099)
    pub const fn is_record_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a data integrity finding (0100-0199)
    pub const fn is_integrity_finding(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VAX{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Record errors (0001-0099)
    map.insert(1, ErrorInfo::new("Invalid JSON record"));
    map.insert(2, ErrorInfo::new("Missing required field"));
    map.insert(3, ErrorInfo::new("Invalid field type"));
    map.insert(4, ErrorInfo::new("Invalid timestamp")
        .with_help("Expected a timestamp such as 2021-01-11T08:59:28.642790Z"));
    map.insert(5, ErrorInfo::new("Unknown manufacturer")
        .with_help("Known manufacturers are Antiqua, SolarBuddhica and Zerpfy"));
    map.insert(6, ErrorInfo::new("Unknown gender"));
    map.insert(7, ErrorInfo::new("Invalid dose capacity")
        .with_help("A bottle must hold at least one dose"));

    // Data integrity findings (0100-0199)
    map.insert(100, ErrorInfo::new("Bottle over-administered")
        .with_help("More doses reference this bottle than it can hold"));
    map.insert(101, ErrorInfo::new("Dose references unknown bottle"));
    map.insert(102, ErrorInfo::new("Dose administered before bottle arrival"));

    // System errors (0400-0499)
    map.insert(401, ErrorInfo::new("I/O error"));
    map.insert(402, ErrorInfo::new("Configuration error"));
    map.insert(404, ErrorInfo::new("File not found"));

    map
});

// Record errors
pub const VAX0001: ErrorCode = ErrorCode::new(1);
pub const VAX0002: ErrorCode = ErrorCode::new(2);
pub const VAX0003: ErrorCode = ErrorCode::new(3);
pub const VAX0004: ErrorCode = ErrorCode::new(4);
pub const VAX0005: ErrorCode = ErrorCode::new(5);
pub const VAX0006: ErrorCode = ErrorCode::new(6);
pub const VAX0007: ErrorCode = ErrorCode::new(7);

// Data integrity findings
pub const VAX0100: ErrorCode = ErrorCode::new(100);
pub const VAX0101: ErrorCode = ErrorCode::new(101);
pub const VAX0102: ErrorCode = ErrorCode::new(102);

// System errors
pub const VAX0401: ErrorCode = ErrorCode::new(401);
pub const VAX0402: ErrorCode = ErrorCode::new(402);
pub const VAX0404: ErrorCode = ErrorCode::new(404);
