//! Typed source records
//!
//! One JSON object per line. Field names follow the source files; unknown
//! fields are ignored.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use vaxtrack_diagnostics::{Result, VAX0001, VAX0002, VAX0003, VAX0007, VaxError};
use vaxtrack_types::{Bottle, Dose, Gender, Manufacturer, parse_timestamp};

/// A bottle as it appears in a manufacturer's order file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleRecord {
    pub id: String,
    pub order_number: u64,
    pub responsible_person: String,
    #[serde(default)]
    pub health_care_district: Option<String>,
    pub vaccine: String,
    pub injections: i64,
    pub arrived: String,
}

/// A dose as it appears in the administration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseRecord {
    #[serde(rename = "vaccination-id")]
    pub vaccination_id: String,
    pub gender: String,
    pub source_bottle: String,
    pub vaccination_date: String,
}

/// A record type decoded from one line
pub trait Record: DeserializeOwned {
    /// Fields that must be present on every line
    const REQUIRED: &'static [&'static str];
}

impl Record for BottleRecord {
    const REQUIRED: &'static [&'static str] = &[
        "id",
        "orderNumber",
        "responsiblePerson",
        "vaccine",
        "injections",
        "arrived",
    ];
}

impl Record for DoseRecord {
    const REQUIRED: &'static [&'static str] =
        &["vaccination-id", "gender", "sourceBottle", "vaccinationDate"];
}

impl BottleRecord {
    /// Validate the record and build a bottle from it
    pub fn into_bottle(self) -> Result<Bottle> {
        let manufacturer: Manufacturer = self.vaccine.parse()?;
        let injections = u32::try_from(self.injections)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                VaxError::record(
                    VAX0007,
                    format!("bottle {} holds {} doses", self.id, self.injections),
                )
            })?;
        let arrived =
            parse_timestamp(&self.arrived).map_err(|e| e.with_context("field 'arrived'"))?;

        Ok(Bottle::new(self.id, manufacturer, injections, arrived)
            .with_order_number(self.order_number)
            .with_responsible_person(self.responsible_person)
            .with_district(self.health_care_district))
    }
}

impl DoseRecord {
    /// Validate the record and build a dose from it
    pub fn into_dose(self) -> Result<Dose> {
        let gender: Gender = self.gender.parse()?;
        let administered = parse_timestamp(&self.vaccination_date)
            .map_err(|e| e.with_context("field 'vaccinationDate'"))?;
        Ok(Dose::new(self.vaccination_id, gender, self.source_bottle, administered))
    }
}

/// Decode one JSON line into a record type
///
/// Invalid JSON is `VAX0001`, a missing required field `VAX0002` and any other
/// shape mismatch `VAX0003`.
pub fn parse_record<T: Record>(line: &str) -> Result<T> {
    let value: Value =
        serde_json::from_str(line).map_err(|err| VaxError::record(VAX0001, err.to_string()))?;
    let Some(object) = value.as_object() else {
        return Err(VaxError::record(VAX0003, "record is not a JSON object"));
    };
    if let Some(field) = T::REQUIRED.iter().find(|f| !object.contains_key(**f)) {
        return Err(VaxError::record(VAX0002, format!("missing field `{}`", field)));
    }
    serde_json::from_value(value).map_err(|err| VaxError::record(VAX0003, err.to_string()))
}
