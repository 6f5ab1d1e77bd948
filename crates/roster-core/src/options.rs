//! Filter Options
//!
//! Values offered by the status and species selectors.

use std::collections::BTreeSet;

use crate::models::Character;

pub const KNOWN_STATUSES: &[&str] = &["Alive", "Dead", "unknown"];
pub const KNOWN_SPECIES: &[&str] = &["Human", "Alien"];

/// Known statuses first, then any other status present in `records`, sorted
pub fn status_options(records: &[Character]) -> Vec<String> {
    merge_options(KNOWN_STATUSES, records.iter().map(|c| c.status.as_str()))
}

pub fn species_options(records: &[Character]) -> Vec<String> {
    merge_options(KNOWN_SPECIES, records.iter().map(|c| c.species.as_str()))
}

fn merge_options<'a>(known: &[&str], observed: impl Iterator<Item = &'a str>) -> Vec<String> {
    let extra: BTreeSet<&str> = observed
        .filter(|value| !value.is_empty() && !known.contains(value))
        .collect();
    known
        .iter()
        .map(|value| value.to_string())
        .chain(extra.into_iter().map(str::to_string))
        .collect()
}
