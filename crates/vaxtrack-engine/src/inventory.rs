//! Bottle inventory and its aggregation queries

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use vaxtrack_types::{Bottle, District, Manufacturer};

/// Bottles and doses that arrived for one manufacturer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ManufacturerArrivals {
    pub bottles: usize,
    pub doses: u64,
}

/// All bottles of a snapshot, in load order
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    bottles: Vec<Bottle>,
    /// Bottle id -> position of the first bottle with that id
    index: HashMap<String, usize>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from bottles in load order
    pub fn from_bottles(bottles: impl IntoIterator<Item = Bottle>) -> Self {
        let mut inventory = Self::new();
        for bottle in bottles {
            inventory.insert(bottle);
        }
        inventory
    }

    /// Add a bottle
    ///
    /// Every bottle is kept and counted, but when ids repeat only the first
    /// bottle with the id is indexed. Doses for that id are linked to it alone;
    /// later bottles sharing the id never receive doses, rather than each of
    /// them receiving a copy.
    pub fn insert(&mut self, bottle: Bottle) {
        let position = self.bottles.len();
        if self.index.contains_key(bottle.id()) {
            log::warn!("duplicate bottle id {}; doses link to the first one", bottle.id());
        } else {
            self.index.insert(bottle.id().to_string(), position);
        }
        self.bottles.push(bottle);
    }

    /// Number of bottles loaded
    pub fn len(&self) -> usize {
        self.bottles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bottles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bottle> {
        self.bottles.iter()
    }

    /// Look a bottle up by id
    pub fn get(&self, id: &str) -> Option<&Bottle> {
        self.index.get(id).map(|&i| &self.bottles[i])
    }

    /// Append a dose to the bottle with `bottle_id`; false when no such bottle
    pub(crate) fn link_dose(&mut self, bottle_id: &str, dose_id: &str) -> bool {
        match self.index.get(bottle_id) {
            Some(&i) => {
                self.bottles[i].record_dose(dose_id);
                true
            }
            None => false,
        }
    }

    /// Bottles that arrive on the calendar date of `t`, at any time of day
    pub fn count_arrived_on_date(&self, t: NaiveDateTime) -> usize {
        self.iter().filter(|b| b.arrived_on_date_of(t)).count()
    }

    /// Bottles that arrived strictly before `t`
    pub fn count_arrived_by(&self, t: NaiveDateTime) -> usize {
        self.iter().filter(|b| b.arrived_before(t)).count()
    }

    /// Dose capacity of the bottles arriving on the date of `t`
    pub fn doses_arrived_on_date(&self, t: NaiveDateTime) -> u64 {
        self.iter()
            .filter(|b| b.arrived_on_date_of(t))
            .map(|b| u64::from(b.injections()))
            .sum()
    }

    /// Arrivals on the date of `t` for every manufacturer, zero rows included
    pub fn count_and_doses_arrived_by_manufacturer(
        &self,
        t: NaiveDateTime,
    ) -> IndexMap<Manufacturer, ManufacturerArrivals> {
        Manufacturer::ALL
            .into_iter()
            .map(|manufacturer| {
                let arrivals = self
                    .iter()
                    .filter(|b| b.manufacturer() == manufacturer && b.arrived_on_date_of(t))
                    .fold(ManufacturerArrivals::default(), |acc, b| ManufacturerArrivals {
                        bottles: acc.bottles + 1,
                        doses: acc.doses + u64::from(b.injections()),
                    });
                (manufacturer, arrivals)
            })
            .collect()
    }

    /// Bottles whose expiry day is the date of `t`
    pub fn count_expired_on_day(&self, t: NaiveDateTime) -> usize {
        let day = t.date();
        self.iter().filter(|b| b.is_expired_on_day(day)).count()
    }

    /// Unused doses of the bottles whose expiry day is the date of `t`
    pub fn doses_expired_on_day(&self, t: NaiveDateTime) -> i64 {
        let day = t.date();
        self.iter().map(|b| b.doses_expired_on(day)).sum()
    }

    /// Unused doses of every bottle expired at `t`, a running total
    pub fn total_doses_expired_by(&self, t: NaiveDateTime) -> i64 {
        self.iter()
            .filter(|b| b.is_expired(t))
            .map(Bottle::unused_doses)
            .sum()
    }

    /// Usable doses at `t` across all bottles
    pub fn total_doses_remaining(&self, t: NaiveDateTime) -> i64 {
        self.iter().map(|b| b.doses_remaining(t)).sum()
    }

    /// Doses expiring within the next 10 days, as of `t`
    pub fn total_doses_expiring_soon(&self, t: NaiveDateTime) -> i64 {
        self.iter().map(|b| b.doses_expiring_soon(t)).sum()
    }

    /// Expiring-soon doses per healthcare district
    ///
    /// Only bottles with a positive count contribute, so districts without
    /// expiring doses are absent rather than zero. Bottles without a district
    /// are grouped under [`District::Unassigned`]. Keys keep the order in which
    /// districts first contribute.
    pub fn doses_expiring_soon_by_district(&self, t: NaiveDateTime) -> IndexMap<District, i64> {
        let mut by_district = IndexMap::new();
        for bottle in self.iter() {
            let expiring = bottle.doses_expiring_soon_with_district(t);
            if expiring.doses <= 0 {
                continue;
            }
            if let Some(district) = expiring.district {
                *by_district.entry(district).or_insert(0) += expiring.doses;
            }
        }
        by_district
    }

    /// Number of bottles per manufacturer over the whole snapshot
    pub fn bottles_by_manufacturer(&self) -> IndexMap<Manufacturer, usize> {
        Manufacturer::ALL
            .into_iter()
            .map(|m| (m, self.iter().filter(|b| b.manufacturer() == m).count()))
            .collect()
    }
}
