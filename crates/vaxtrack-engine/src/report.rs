//! Daily report
//!
//! Collects every query for one instant into a single serializable value, the
//! way a dashboard page shows them side by side.

use crate::{ManufacturerArrivals, Snapshot};
use chrono::{NaiveDateTime, TimeDelta};
use indexmap::IndexMap;
use serde::Serialize;
use vaxtrack_types::{District, Manufacturer};

/// Summary of the snapshot as of one query instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    /// Query date as `d.m.yyyy`
    pub date: String,
    pub query_time: NaiveDateTime,
    /// Same time of day, one day earlier; absent at the edge of the calendar
    pub previous_day: Option<NaiveDateTime>,
    /// Same time of day, one day later; absent at the edge of the calendar
    pub next_day: Option<NaiveDateTime>,

    pub bottles_arrived_on_date: usize,
    pub bottles_arrived_by: usize,
    pub doses_arrived_on_date: u64,
    pub doses_administered_on_date: usize,
    pub arrivals_by_manufacturer: IndexMap<Manufacturer, ManufacturerArrivals>,

    pub bottles_expired_on_day: usize,
    pub doses_expired_on_day: i64,
    pub doses_remaining: i64,
    pub doses_expiring_soon: i64,
    pub total_doses_expired_by: i64,
    pub doses_expiring_soon_by_district: IndexMap<District, i64>,

    pub total_bottles: usize,
    pub total_administrations: usize,
}

impl DailyReport {
    /// Run every query against `snapshot` as of `t`
    pub fn build(snapshot: &Snapshot, t: NaiveDateTime) -> Self {
        let inventory = snapshot.inventory();
        let administrations = snapshot.administrations();

        Self {
            date: t.format("%-d.%-m.%Y").to_string(),
            query_time: t,
            previous_day: t.checked_sub_signed(TimeDelta::days(1)),
            next_day: t.checked_add_signed(TimeDelta::days(1)),

            bottles_arrived_on_date: inventory.count_arrived_on_date(t),
            bottles_arrived_by: inventory.count_arrived_by(t),
            doses_arrived_on_date: inventory.doses_arrived_on_date(t),
            doses_administered_on_date: administrations.count_administered_on_date(t),
            arrivals_by_manufacturer: inventory.count_and_doses_arrived_by_manufacturer(t),

            bottles_expired_on_day: inventory.count_expired_on_day(t),
            doses_expired_on_day: inventory.doses_expired_on_day(t),
            doses_remaining: inventory.total_doses_remaining(t),
            doses_expiring_soon: inventory.total_doses_expiring_soon(t),
            total_doses_expired_by: inventory.total_doses_expired_by(t),
            doses_expiring_soon_by_district: inventory.doses_expiring_soon_by_district(t),

            total_bottles: inventory.len(),
            total_administrations: administrations.len(),
        }
    }

    /// Reports for `days` consecutive days starting at `t`
    ///
    /// Stops early when a day falls past the last representable date.
    pub fn series(snapshot: &Snapshot, t: NaiveDateTime, days: u32) -> Vec<Self> {
        (0..i64::from(days))
            .map_while(|offset| t.checked_add_signed(TimeDelta::days(offset)))
            .map(|day| Self::build(snapshot, day))
            .collect()
    }
}
