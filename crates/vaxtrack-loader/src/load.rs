//! Loading line-delimited record files into the engine

use crate::DataSources;
use crate::record::{BottleRecord, DoseRecord, parse_record};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use vaxtrack_diagnostics::{RecordLocation, Result, VaxError};
use vaxtrack_engine::{AdministrationLog, Inventory, Snapshot};
use vaxtrack_types::{Bottle, Dose};

/// Decode every non-blank line of `reader` with `convert`
///
/// Stops at the first malformed record; the error carries the record location.
fn read_lines<R, T>(reader: R, source: &str, convert: impl Fn(&str) -> Result<T>) -> Result<Vec<T>>
where
    R: BufRead,
{
    let mut items = Vec::new();
    let mut location = RecordLocation::new(source, 0);
    for line in reader.lines() {
        location = location.next_line();
        let line = line.map_err(|e| VaxError::io(Path::new(source), &e))?;
        if line.trim().is_empty() {
            continue;
        }
        items.push(convert(&line).map_err(|e| e.at(location.clone()))?);
    }
    Ok(items)
}

/// Read bottle records from line-delimited JSON
pub fn read_bottles<R: BufRead>(reader: R, source: &str) -> Result<Vec<Bottle>> {
    read_lines(reader, source, |line| parse_record::<BottleRecord>(line)?.into_bottle())
}

/// Read administration records from line-delimited JSON
pub fn read_doses<R: BufRead>(reader: R, source: &str) -> Result<Vec<Dose>> {
    read_lines(reader, source, |line| parse_record::<DoseRecord>(line)?.into_dose())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| VaxError::io(path, &e))
}

/// Load every configured bottle file into a new inventory
pub fn load_inventory(sources: &DataSources) -> Result<Inventory> {
    let mut inventory = Inventory::new();
    for path in &sources.bottle_files {
        let bottles = read_bottles(open(path)?, &path.display().to_string())?;
        log::debug!("{} bottles read from {}", bottles.len(), path.display());
        for bottle in bottles {
            inventory.insert(bottle);
        }
    }
    log::info!("{} bottles loaded", inventory.len());
    Ok(inventory)
}

/// Load the administration file and link each dose into `inventory`
pub fn load_administration_log(path: &Path, inventory: &mut Inventory) -> Result<AdministrationLog> {
    let doses = read_doses(open(path)?, &path.display().to_string())?;
    let administrations = AdministrationLog::link(doses, inventory);
    log::info!("{} administrations loaded", administrations.len());
    if administrations.unlinked_count() > 0 {
        log::warn!(
            "{} administrations refer to unknown bottles",
            administrations.unlinked_count()
        );
    }
    Ok(administrations)
}

/// Load bottles, then administrations, and freeze them into a snapshot
pub fn load_snapshot(sources: &DataSources) -> Result<Snapshot> {
    let mut inventory = load_inventory(sources)?;
    let administrations = load_administration_log(&sources.administration_file, &mut inventory)?;
    Ok(Snapshot::new(inventory, administrations))
}
