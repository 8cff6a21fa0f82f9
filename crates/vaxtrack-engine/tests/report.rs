//! Daily report tests

mod common;

use common::{at, clinic, midnight};
use chrono::{NaiveDate, TimeDelta};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use vaxtrack_engine::{DailyReport, ManufacturerArrivals};
use vaxtrack_types::{District, Manufacturer};

#[test]
fn test_report_for_warning_period() {
    let snap = clinic();
    let report = DailyReport::build(&snap, midnight(2021, 1, 26));

    let expected = DailyReport {
        date: "26.1.2021".to_string(),
        query_time: midnight(2021, 1, 26),
        previous_day: Some(midnight(2021, 1, 25)),
        next_day: Some(midnight(2021, 1, 27)),
        bottles_arrived_on_date: 0,
        bottles_arrived_by: 4,
        doses_arrived_on_date: 0,
        doses_administered_on_date: 0,
        arrivals_by_manufacturer: Manufacturer::ALL
            .into_iter()
            .map(|m| (m, ManufacturerArrivals::default()))
            .collect(),
        bottles_expired_on_day: 0,
        doses_expired_on_day: 0,
        doses_remaining: 12,
        doses_expiring_soon: 12,
        total_doses_expired_by: 0,
        doses_expiring_soon_by_district: IndexMap::from([
            (District::Named("HYKS".into()), 8),
            (District::Named("KYS".into()), 4),
        ]),
        total_bottles: 4,
        total_administrations: 8,
    };

    assert_eq!(report, expected);
}

#[test]
fn test_report_json_shape() {
    let snap = clinic();
    let report = DailyReport::build(&snap, at(2021, 1, 1, 12, 0));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["date"], "1.1.2021");
    assert_eq!(json["queryTime"], "2021-01-01T12:00:00");
    assert_eq!(json["bottlesArrivedOnDate"], 2);
    assert_eq!(json["dosesArrivedOnDate"], 10);
    assert_eq!(json["arrivalsByManufacturer"]["Antiqua"]["bottles"], 1);
    assert_eq!(json["arrivalsByManufacturer"]["Zerpfy"]["doses"], 0);
    assert_eq!(json["dosesExpiringSoonByDistrict"], serde_json::json!({}));
}

#[test]
fn test_series_steps_one_day() {
    let snap = clinic();
    let reports = DailyReport::series(&snap, at(2021, 1, 30, 12, 0), 3);

    let dates = reports.iter().map(|r| r.date.as_str()).collect::<Vec<_>>();
    assert_eq!(dates, ["30.1.2021", "31.1.2021", "1.2.2021"]);
    assert_eq!(reports[1].bottles_expired_on_day, 2);
    assert_eq!(reports[1].previous_day, Some(reports[0].query_time));
}

#[test]
fn test_report_at_last_date() {
    let snap = clinic();
    let last = NaiveDate::MAX.and_hms_opt(12, 0, 0).unwrap();

    let report = DailyReport::build(&snap, last);
    assert_eq!(report.next_day, None);
    assert_eq!(report.previous_day, Some(last - TimeDelta::days(1)));
    assert_eq!(report.total_doses_expired_by, 12);
    assert_eq!(report.doses_remaining, 0);

    let reports = DailyReport::series(&snap, last - TimeDelta::days(1), 5);
    assert_eq!(reports.len(), 2);
}
