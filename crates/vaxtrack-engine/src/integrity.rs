//! Data integrity checks
//!
//! Queries accept inconsistent data as-is. This pass lists what looks wrong so
//! it can be reported next to the numbers.

use crate::{AdministrationLog, Inventory};
use vaxtrack_diagnostics::{Diagnostic, VAX0100, VAX0101, VAX0102};

/// Check the linked snapshot for suspicious records
///
/// Reports, in this order:
/// - bottles with more administered doses than capacity (warning)
/// - doses administered before their bottle arrived (warning)
/// - doses that refer to an unknown bottle (info)
pub fn check_integrity(inventory: &Inventory, administrations: &AdministrationLog) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for bottle in inventory.iter().filter(|b| b.is_over_administered()) {
        diagnostics.push(Diagnostic::warning(
            VAX0100,
            format!(
                "bottle {} holds {} doses but {} were administered",
                bottle.id(),
                bottle.injections(),
                bottle.administered_count()
            ),
        ));
    }

    for dose in administrations.iter() {
        let Some(bottle) = inventory.get(dose.source_bottle()) else {
            continue;
        };
        if dose.administered() < bottle.arrived() {
            diagnostics.push(Diagnostic::warning(
                VAX0102,
                format!(
                    "dose {} was administered at {} before bottle {} arrived at {}",
                    dose.id(),
                    dose.administered(),
                    bottle.id(),
                    bottle.arrived()
                ),
            ));
        }
    }

    for dose in administrations.unlinked() {
        diagnostics.push(Diagnostic::info(
            VAX0101,
            format!("dose {} refers to unknown bottle {}", dose.id(), dose.source_bottle()),
        ));
    }

    for diag in &diagnostics {
        log::warn!("{}", diag);
    }

    diagnostics
}
