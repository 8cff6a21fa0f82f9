//! Vaccine manufacturers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vaxtrack_diagnostics::{VAX0005, VaxError};

/// Manufacturer of a vaccine bottle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Manufacturer {
    Antiqua,
    SolarBuddhica,
    Zerpfy,
}

impl Manufacturer {
    /// Every known manufacturer, in reporting order
    pub const ALL: [Manufacturer; 3] = [
        Manufacturer::Antiqua,
        Manufacturer::SolarBuddhica,
        Manufacturer::Zerpfy,
    ];

    /// Name as it appears in source records
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Antiqua => "Antiqua",
            Self::SolarBuddhica => "SolarBuddhica",
            Self::Zerpfy => "Zerpfy",
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Manufacturer {
    type Err = VaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| VaxError::record(VAX0005, format!("unknown manufacturer '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        for m in Manufacturer::ALL {
            assert_eq!(m.name().parse::<Manufacturer>().unwrap(), m);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "zerpfy".parse::<Manufacturer>().unwrap_err();
        assert_eq!(err.code(), VAX0005);
    }
}
