//! Dose administration events

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vaxtrack_diagnostics::{VAX0006, VaxError};

/// Gender of the vaccinated person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Nonbinary,
}

impl Gender {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Nonbinary => "nonbinary",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = VaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            "nonbinary" => Ok(Self::Nonbinary),
            other => Err(VaxError::record(VAX0006, format!("unknown gender '{}'", other))),
        }
    }
}

/// One administration of a vaccine dose
///
/// The dose only refers to its bottle by id; linking it into the bottle is the
/// administration log's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dose {
    id: String,
    gender: Gender,
    source_bottle: String,
    administered: NaiveDateTime,
}

impl Dose {
    pub fn new(
        id: impl Into<String>,
        gender: Gender,
        source_bottle: impl Into<String>,
        administered: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            gender,
            source_bottle: source_bottle.into(),
            administered,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Id of the bottle this dose was drawn from
    pub fn source_bottle(&self) -> &str {
        &self.source_bottle
    }

    /// When the dose was administered
    pub fn administered(&self) -> NaiveDateTime {
        self.administered
    }

    /// Calendar comparison: was this dose given on the date of `t`
    pub fn administered_on_date_of(&self, t: NaiveDateTime) -> bool {
        crate::window::same_day(self.administered, t)
    }
}
