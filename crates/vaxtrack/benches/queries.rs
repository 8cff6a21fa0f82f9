//! Query benchmarks using divan
//!
//! Synthetic inventories with one administration per bottle slot up to half
//! capacity, spread over a year of arrivals.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use vaxtrack::types::{Gender, Manufacturer};
use vaxtrack::{AdministrationLog, Bottle, DailyReport, Dose, Inventory, Snapshot};

fn main() {
    divan::main();
}

const DISTRICTS: [&str; 5] = ["HYKS", "KYS", "OYS", "TAYS", "TYKS"];

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, 2)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
}

fn query_time() -> NaiveDateTime {
    start() + TimeDelta::days(180)
}

fn bottles(count: usize) -> Vec<Bottle> {
    (0..count)
        .map(|i| {
            let manufacturer = Manufacturer::ALL[i % 3];
            Bottle::new(
                format!("bottle-{}", i),
                manufacturer,
                4 + (i % 3) as u32,
                start() + TimeDelta::minutes((i * 37 % 525_600) as i64),
            )
            .with_district((i % 7 != 0).then(|| DISTRICTS[i % DISTRICTS.len()]))
        })
        .collect()
}

fn snapshot(count: usize) -> Snapshot {
    let bottles = bottles(count);
    let doses = bottles
        .iter()
        .flat_map(|b| {
            (0..b.injections() / 2).map(move |k| {
                Dose::new(
                    format!("{}-{}", b.id(), k),
                    Gender::Nonbinary,
                    b.id(),
                    b.arrived() + TimeDelta::days(i64::from(k) + 1),
                )
            })
        })
        .collect::<Vec<_>>();
    let mut inventory = Inventory::from_bottles(bottles);
    let log = AdministrationLog::link(doses, &mut inventory);
    Snapshot::new(inventory, log)
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn link_administrations(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| {
            let bottles = bottles(count);
            let doses = bottles
                .iter()
                .map(|b| Dose::new(format!("{}-0", b.id()), Gender::Female, b.id(), b.arrived()))
                .collect::<Vec<_>>();
            (Inventory::from_bottles(bottles), doses)
        })
        .bench_values(|(mut inventory, doses)| AdministrationLog::link(doses, &mut inventory));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn total_doses_remaining(bencher: divan::Bencher, count: usize) {
    let snapshot = snapshot(count);
    let t = query_time();
    bencher.bench(|| divan::black_box(snapshot.inventory().total_doses_remaining(t)));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn expiring_soon_by_district(bencher: divan::Bencher, count: usize) {
    let snapshot = snapshot(count);
    let t = query_time();
    bencher.bench(|| divan::black_box(snapshot.inventory().doses_expiring_soon_by_district(t)));
}

#[divan::bench(args = [1_000, 10_000])]
fn daily_report(bencher: divan::Bencher, count: usize) {
    let snapshot = snapshot(count);
    let t = query_time();
    bencher.bench(|| divan::black_box(DailyReport::build(&snapshot, t)));
}
