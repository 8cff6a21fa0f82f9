//! Healthcare districts as aggregation keys

use serde::{Serialize, Serializer};
use std::fmt;

/// Label used for bottles without a healthcare district
pub const UNASSIGNED_LABEL: &str = "(unassigned)";

/// Healthcare district a bottle was delivered to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum District {
    /// A named district such as `HYKS` or `KYS`
    Named(String),
    /// The bottle's record carried no district
    Unassigned,
}

impl District {
    /// Build a key from an optional district name
    pub fn from_optional(name: Option<&str>) -> Self {
        match name {
            Some(name) => Self::Named(name.to_string()),
            None => Self::Unassigned,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        matches!(self, Self::Unassigned)
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Unassigned => f.write_str(UNASSIGNED_LABEL),
        }
    }
}

// Serialized as a plain string so it can key a JSON object.
impl Serialize for District {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
