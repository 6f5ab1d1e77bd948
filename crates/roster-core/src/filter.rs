//! Filtering
//!
//! Name substring (case-insensitive) plus exact status/species matching.

use serde::{Deserialize, Serialize};

use crate::models::Character;
use crate::pagination::{self, PageSize};

/// Empty name or `None` means "no constraint" for that field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name: String,
    pub status: Option<String>,
    pub species: Option<String>,
}

impl FilterCriteria {
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// An empty selection clears the constraint
    pub fn set_status(&mut self, status: &str) {
        self.status = non_empty(status);
    }

    pub fn set_species(&mut self, species: &str) {
        self.species = non_empty(species);
    }

    pub fn matches(&self, character: &Character) -> bool {
        self.matches_lowered(&self.name.to_lowercase(), character)
    }

    fn matches_lowered(&self, needle: &str, character: &Character) -> bool {
        character.name.to_lowercase().contains(needle)
            && self.status.as_deref().map_or(true, |s| character.status == s)
            && self.species.as_deref().map_or(true, |s| character.species == s)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Indices into `records` of every match, in collection order
pub fn filter_indices(records: &[Character], criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.name.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, c)| criteria.matches_lowered(&needle, c))
        .map(|(i, _)| i)
        .collect()
}

/// Output of a full recomputation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recomputed {
    pub filtered: Vec<usize>,
    pub total_pages: usize,
}

pub fn recompute(records: &[Character], criteria: &FilterCriteria, page_size: PageSize) -> Recomputed {
    let filtered = filter_indices(records, criteria);
    let total_pages = pagination::total_pages(filtered.len(), page_size);
    Recomputed { filtered, total_pages }
}
