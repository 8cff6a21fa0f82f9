//! Shared fixtures for engine tests
//!
//! Builders for bottles and doses plus a small hand-checked snapshot.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use vaxtrack_engine::{AdministrationLog, Inventory, Snapshot};
use vaxtrack_types::{Bottle, Dose, Gender, Manufacturer};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0)
}

/// Builder for test bottles
pub struct BottleBuilder {
    id: String,
    manufacturer: Manufacturer,
    injections: u32,
    arrived: NaiveDateTime,
    district: Option<String>,
}

impl BottleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            manufacturer: Manufacturer::Antiqua,
            injections: 10,
            arrived: midnight(2021, 1, 1),
            district: None,
        }
    }

    pub fn manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.manufacturer = manufacturer;
        self
    }

    pub fn injections(mut self, injections: u32) -> Self {
        self.injections = injections;
        self
    }

    pub fn arrived(mut self, arrived: NaiveDateTime) -> Self {
        self.arrived = arrived;
        self
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn build(self) -> Bottle {
        Bottle::new(self.id, self.manufacturer, self.injections, self.arrived)
            .with_district(self.district)
    }
}

/// `count` doses drawn from `bottle`, given one hour apart from `first`
pub fn doses_from(bottle: &str, count: usize, first: NaiveDateTime) -> Vec<Dose> {
    (0..count)
        .map(|i| {
            Dose::new(
                format!("{}-dose-{}", bottle, i),
                Gender::Female,
                bottle,
                first + chrono::TimeDelta::hours(i as i64),
            )
        })
        .collect()
}

pub fn snapshot(bottles: Vec<Bottle>, doses: Vec<Dose>) -> Snapshot {
    let mut inventory = Inventory::from_bottles(bottles);
    let log = AdministrationLog::link(doses, &mut inventory);
    Snapshot::new(inventory, log)
}

/// Four bottles across three districts and every manufacturer
///
/// | id | maker         | doses | arrived          | district | given |
/// |----|---------------|-------|------------------|----------|-------|
/// | a  | Antiqua       | 4     | 2021-01-01 08:00 | HYKS     | 1     |
/// | b  | SolarBuddhica | 6     | 2021-01-01 17:30 | KYS      | 2     |
/// | c  | Zerpfy        | 5     | 2021-01-05 12:00 | HYKS     | 0     |
/// | d  | Zerpfy        | 5     | 2021-01-10 09:00 | (none)   | 5     |
pub fn clinic() -> Snapshot {
    let bottles = vec![
        BottleBuilder::new("a")
            .injections(4)
            .arrived(at(2021, 1, 1, 8, 0))
            .district("HYKS")
            .build(),
        BottleBuilder::new("b")
            .manufacturer(Manufacturer::SolarBuddhica)
            .injections(6)
            .arrived(at(2021, 1, 1, 17, 30))
            .district("KYS")
            .build(),
        BottleBuilder::new("c")
            .manufacturer(Manufacturer::Zerpfy)
            .injections(5)
            .arrived(at(2021, 1, 5, 12, 0))
            .district("HYKS")
            .build(),
        BottleBuilder::new("d")
            .manufacturer(Manufacturer::Zerpfy)
            .injections(5)
            .arrived(at(2021, 1, 10, 9, 0))
            .build(),
    ];
    let mut doses = doses_from("a", 1, at(2021, 1, 2, 9, 0));
    doses.extend(doses_from("b", 2, at(2021, 1, 2, 10, 0)));
    doses.extend(doses_from("d", 5, at(2021, 1, 11, 8, 0)));
    snapshot(bottles, doses)
}
