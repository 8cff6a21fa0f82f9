//! Vaccine bottles
//!
//! A bottle holds a fixed number of doses and starts its 30 day expiration
//! window on arrival. All derived state is computed relative to a query instant
//! `t`, which may lie before, inside or after the bottle's lifetime.
//!
//! Dose arithmetic is signed: inconsistent source data can administer more
//! doses from a bottle than it holds, and that surfaces as a negative count
//! rather than being clamped.

use crate::District;
use crate::Manufacturer;
use crate::window;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One received bottle of vaccine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottle {
    id: String,
    order_number: u64,
    responsible_person: String,
    healthcare_district: Option<String>,
    manufacturer: Manufacturer,
    injections: u32,
    arrived: NaiveDateTime,
    #[serde(skip)]
    doses: Vec<String>,
}

/// Expiring-soon dose count paired with the district to book it under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiringDoses {
    pub doses: i64,
    /// `None` exactly when `doses` is zero
    pub district: Option<District>,
}

impl Bottle {
    /// Create a bottle with no administered doses
    pub fn new(
        id: impl Into<String>,
        manufacturer: Manufacturer,
        injections: u32,
        arrived: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            order_number: 0,
            responsible_person: String::new(),
            healthcare_district: None,
            manufacturer,
            injections,
            arrived,
            doses: Vec::new(),
        }
    }

    pub fn with_order_number(mut self, order_number: u64) -> Self {
        self.order_number = order_number;
        self
    }

    pub fn with_responsible_person(mut self, person: impl Into<String>) -> Self {
        self.responsible_person = person.into();
        self
    }

    pub fn with_district(mut self, district: Option<impl Into<String>>) -> Self {
        self.healthcare_district = district.map(Into::into);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn order_number(&self) -> u64 {
        self.order_number
    }

    pub fn responsible_person(&self) -> &str {
        &self.responsible_person
    }

    pub fn healthcare_district(&self) -> Option<&str> {
        self.healthcare_district.as_deref()
    }

    pub fn manufacturer(&self) -> Manufacturer {
        self.manufacturer
    }

    /// Number of doses the bottle holds
    pub fn injections(&self) -> u32 {
        self.injections
    }

    pub fn arrived(&self) -> NaiveDateTime {
        self.arrived
    }

    /// Ids of the doses drawn from this bottle, in link order
    pub fn doses(&self) -> &[String] {
        &self.doses
    }

    /// Record a dose drawn from this bottle
    pub fn record_dose(&mut self, dose_id: impl Into<String>) {
        self.doses.push(dose_id.into());
    }

    pub fn administered_count(&self) -> usize {
        self.doses.len()
    }

    /// Capacity minus administered doses; negative when over-administered
    pub fn unused_doses(&self) -> i64 {
        i64::from(self.injections) - self.doses.len() as i64
    }

    pub fn is_over_administered(&self) -> bool {
        self.unused_doses() < 0
    }

    /// Calendar comparison: did the bottle arrive on the date of `t`
    pub fn arrived_on_date_of(&self, t: NaiveDateTime) -> bool {
        window::same_day(self.arrived, t)
    }

    /// Instant comparison: did the bottle arrive strictly before `t`
    pub fn arrived_before(&self, t: NaiveDateTime) -> bool {
        self.arrived < t
    }

    /// Whether the bottle's 30 day window has elapsed at `t`
    pub fn is_expired(&self, t: NaiveDateTime) -> bool {
        window::is_past_expiry(self.arrived, t)
    }

    /// Whether `day` is the single calendar day on which the bottle expires
    pub fn is_expired_on_day(&self, day: NaiveDate) -> bool {
        window::expiry_day(self.arrived) == Some(day)
    }

    /// Unused doses written off on `day`, if that is the expiry day
    pub fn doses_expired_on(&self, day: NaiveDate) -> i64 {
        if !self.is_expired_on_day(day) {
            return 0;
        }
        self.unused_doses()
    }

    /// Unused doses during the last 10 days before expiry
    pub fn doses_expiring_soon(&self, t: NaiveDateTime) -> i64 {
        if self.is_expired(t) || !window::is_in_warning_period(self.arrived, t) {
            return 0;
        }
        self.unused_doses()
    }

    /// [`Self::doses_expiring_soon`] together with the district to count it under
    pub fn doses_expiring_soon_with_district(&self, t: NaiveDateTime) -> ExpiringDoses {
        let doses = self.doses_expiring_soon(t);
        let district = (doses != 0)
            .then(|| District::from_optional(self.healthcare_district.as_deref()));
        ExpiringDoses { doses, district }
    }

    /// Usable doses at `t`
    ///
    /// Bottles that arrive on a later calendar date than `t` are not counted,
    /// even though their doses are neither used nor expired yet.
    pub fn doses_remaining(&self, t: NaiveDateTime) -> i64 {
        if self.is_expired(t) || window::arrives_after_day_of(self.arrived, t) {
            return 0;
        }
        self.unused_doses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Ten dose bottle arriving 2021-01-01T00:00 with three doses given
    fn sample() -> Bottle {
        let mut bottle = Bottle::new("b-1", Manufacturer::Antiqua, 10, at(2021, 1, 1, 0))
            .with_district(Some("HYKS"));
        for i in 0..3 {
            bottle.record_dose(format!("d-{}", i));
        }
        bottle
    }

    #[test]
    fn test_remaining_inside_window() {
        assert_eq!(sample().doses_remaining(at(2021, 1, 15, 0)), 7);
    }

    #[test]
    fn test_remaining_before_arrival_day() {
        assert_eq!(sample().doses_remaining(at(2020, 12, 31, 23)), 0);
    }

    #[test]
    fn test_remaining_on_arrival_day_before_arrival_time() {
        let bottle = Bottle::new("b-2", Manufacturer::Zerpfy, 5, at(2021, 1, 1, 18));
        assert_eq!(bottle.doses_remaining(at(2021, 1, 1, 6)), 5);
    }

    #[test]
    fn test_expired_after_thirty_days() {
        let bottle = sample();
        assert!(!bottle.is_expired(at(2021, 1, 31, 0)));
        assert!(bottle.is_expired(at(2021, 2, 1, 0)));
        assert_eq!(bottle.doses_remaining(at(2021, 2, 1, 0)), 0);
    }

    #[rstest]
    #[case(at(2021, 1, 19, 0), 0)]
    #[case(at(2021, 1, 20, 23), 0)]
    #[case(at(2021, 1, 21, 0), 7)]
    #[case(at(2021, 1, 22, 0), 7)]
    #[case(at(2021, 1, 31, 0), 7)]
    #[case(at(2021, 1, 31, 1), 0)]
    fn test_expiring_soon_window(#[case] t: NaiveDateTime, #[case] expected: i64) {
        assert_eq!(sample().doses_expiring_soon(t), expected);
    }

    #[test]
    fn test_expired_on_single_day() {
        let bottle = sample();
        assert!(bottle.is_expired_on_day(day(2021, 1, 31)));
        assert!(!bottle.is_expired_on_day(day(2021, 1, 30)));
        assert!(!bottle.is_expired_on_day(day(2021, 2, 1)));
        assert_eq!(bottle.doses_expired_on(day(2021, 1, 31)), 7);
        assert_eq!(bottle.doses_expired_on(day(2021, 2, 1)), 0);
    }

    #[test]
    fn test_expiring_with_district() {
        let bottle = sample();
        let inside = bottle.doses_expiring_soon_with_district(at(2021, 1, 25, 0));
        assert_eq!(inside.doses, 7);
        assert_eq!(inside.district, Some(District::Named("HYKS".into())));

        let outside = bottle.doses_expiring_soon_with_district(at(2021, 1, 5, 0));
        assert_eq!(outside, ExpiringDoses { doses: 0, district: None });
    }

    #[test]
    fn test_expiring_without_district_is_unassigned() {
        let bottle = Bottle::new("b-3", Manufacturer::SolarBuddhica, 6, at(2021, 1, 1, 0));
        let expiring = bottle.doses_expiring_soon_with_district(at(2021, 1, 25, 0));
        assert_eq!(expiring.district, Some(District::Unassigned));
    }

    #[test]
    fn test_queries_near_last_date_do_not_overflow() {
        let arrived = NaiveDate::MAX.and_hms_opt(12, 0, 0).unwrap();
        let bottle = Bottle::new("b-5", Manufacturer::Zerpfy, 5, arrived);
        let t = at(2021, 1, 1, 0);
        assert!(!bottle.is_expired(t));
        assert_eq!(bottle.doses_remaining(t), 0);
        assert_eq!(bottle.doses_expiring_soon(t), 0);
        assert_eq!(bottle.doses_expired_on(NaiveDate::MAX), 0);
        assert_eq!(bottle.doses_remaining(arrived), 5);
    }

    #[test]
    fn test_over_administration_is_not_clamped() {
        let mut bottle = Bottle::new("b-4", Manufacturer::Antiqua, 2, at(2021, 1, 1, 0));
        for i in 0..3 {
            bottle.record_dose(format!("d-{}", i));
        }
        assert!(bottle.is_over_administered());
        assert_eq!(bottle.doses_remaining(at(2021, 1, 2, 0)), -1);
    }
}
