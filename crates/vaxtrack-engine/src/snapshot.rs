//! Immutable view over a loaded inventory and administration log

use crate::{AdministrationLog, Inventory};
use vaxtrack_diagnostics::Diagnostic;

/// Bottles and doses as loaded at startup, linked and frozen
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    inventory: Inventory,
    log: AdministrationLog,
}

impl Snapshot {
    /// Bundle an inventory with the log that was linked into it
    pub fn new(inventory: Inventory, log: AdministrationLog) -> Self {
        Self { inventory, log }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn administrations(&self) -> &AdministrationLog {
        &self.log
    }

    /// Data integrity findings for this snapshot
    pub fn check_integrity(&self) -> Vec<Diagnostic> {
        crate::check_integrity(&self.inventory, &self.log)
    }
}
