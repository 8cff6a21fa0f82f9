//! Record location tracking for line-delimited sources

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a record inside a line-delimited source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordLocation {
    /// Name of the source, usually a file path
    pub source: String,
    /// Line number (1-based)
    pub line: usize,
}

impl RecordLocation {
    /// Create a new record location
    pub fn new(source: impl Into<String>, line: usize) -> Self {
        Self {
            source: source.into(),
            line,
        }
    }

    /// Location of the record following this one
    pub fn next_line(&self) -> Self {
        Self {
            source: self.source.clone(),
            line: self.line + 1,
        }
    }
}

impl fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let loc = RecordLocation::new("resources/Zerpfy.source", 12);
        assert_eq!(loc.to_string(), "resources/Zerpfy.source:12");
        assert_eq!(loc.next_line().line, 13);
    }
}
