//! Dose administration log

use crate::Inventory;
use chrono::NaiveDateTime;
use vaxtrack_types::Dose;

/// All doses of a snapshot, in load order
#[derive(Debug, Clone, Default)]
pub struct AdministrationLog {
    doses: Vec<Dose>,
    /// Positions of doses whose source bottle is not in the inventory
    unlinked: Vec<usize>,
}

impl AdministrationLog {
    /// Take ownership of `doses` and link each one into its source bottle
    ///
    /// Doses referring to an unknown bottle stay in the log without being
    /// linked anywhere.
    pub fn link(doses: impl IntoIterator<Item = Dose>, inventory: &mut Inventory) -> Self {
        let mut linked = Self::default();
        for dose in doses {
            if !inventory.link_dose(dose.source_bottle(), dose.id()) {
                log::debug!(
                    "dose {} refers to unknown bottle {}",
                    dose.id(),
                    dose.source_bottle()
                );
                linked.unlinked.push(linked.doses.len());
            }
            linked.doses.push(dose);
        }
        linked
    }

    /// Total number of administrations
    pub fn len(&self) -> usize {
        self.doses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dose> {
        self.doses.iter()
    }

    /// Doses that could not be linked to a bottle
    pub fn unlinked(&self) -> impl Iterator<Item = &Dose> {
        self.unlinked.iter().map(|&i| &self.doses[i])
    }

    pub fn unlinked_count(&self) -> usize {
        self.unlinked.len()
    }

    /// Doses administered on the calendar date of `t`
    pub fn count_administered_on_date(&self, t: NaiveDateTime) -> usize {
        self.iter().filter(|d| d.administered_on_date_of(t)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vaxtrack_types::{Bottle, Gender, Manufacturer};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_link_appends_in_order() {
        let mut inventory = Inventory::from_bottles([
            Bottle::new("b-1", Manufacturer::Antiqua, 4, at(2021, 1, 1, 0)),
            Bottle::new("b-2", Manufacturer::Zerpfy, 5, at(2021, 1, 1, 0)),
        ]);
        let log = AdministrationLog::link(
            [
                Dose::new("d-1", Gender::Female, "b-2", at(2021, 1, 2, 9)),
                Dose::new("d-2", Gender::Male, "b-1", at(2021, 1, 2, 10)),
                Dose::new("d-3", Gender::Nonbinary, "b-2", at(2021, 1, 3, 11)),
            ],
            &mut inventory,
        );

        assert_eq!(log.len(), 3);
        assert_eq!(log.unlinked_count(), 0);
        assert_eq!(inventory.get("b-2").unwrap().doses(), ["d-1", "d-3"]);
        assert_eq!(inventory.get("b-1").unwrap().doses(), ["d-2"]);
    }

    #[test]
    fn test_unlinked_dose_is_kept() {
        let mut inventory =
            Inventory::from_bottles([Bottle::new("b-1", Manufacturer::Antiqua, 4, at(2021, 1, 1, 0))]);
        let log = AdministrationLog::link(
            [
                Dose::new("d-1", Gender::Female, "b-1", at(2021, 1, 2, 9)),
                Dose::new("d-2", Gender::Male, "nowhere", at(2021, 1, 2, 10)),
            ],
            &mut inventory,
        );

        assert_eq!(log.len(), 2);
        assert_eq!(log.unlinked().map(Dose::id).collect::<Vec<_>>(), ["d-2"]);
        assert_eq!(inventory.get("b-1").unwrap().administered_count(), 1);
    }

    #[test]
    fn test_count_administered_on_date() {
        let mut inventory = Inventory::new();
        let log = AdministrationLog::link(
            [
                Dose::new("d-1", Gender::Female, "x", at(2021, 3, 1, 0)),
                Dose::new("d-2", Gender::Male, "x", at(2021, 3, 1, 23)),
                Dose::new("d-3", Gender::Male, "x", at(2021, 3, 2, 0)),
            ],
            &mut inventory,
        );
        assert_eq!(log.count_administered_on_date(at(2021, 3, 1, 12)), 2);
        assert_eq!(log.count_administered_on_date(at(2021, 3, 3, 12)), 0);
    }
}
