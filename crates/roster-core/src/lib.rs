//! Roster Core
//!
//! Domain layer for the character roster.
//! This crate has NO browser dependencies; the UI supplies a `PageSource`.
//!
//! - models: wire and detail shapes of the character API
//! - acquisition: follows the `info.next` chain until exhausted
//! - filter / pagination: pure derived-view math
//! - roster: application state with pure update functions

mod acquisition;
mod config;
mod error;
mod filter;
mod models;
mod options;
mod pagination;
mod roster;

pub use acquisition::{load_all_records, LoadState, PageSource};
pub use config::{PageOrder, RosterConfig, DEFAULT_ENDPOINT};
pub use error::{FetchError, FetchResult, InvalidPageSize};
pub use filter::{filter_indices, recompute, FilterCriteria, Recomputed};
pub use models::{Character, CharacterDetail, CharacterPage, LocationRef, PageInfo};
pub use options::{species_options, status_options, KNOWN_SPECIES, KNOWN_STATUSES};
pub use pagination::{page_range, page_slice, step_page, total_pages, PageDirection, PageSize, PAGE_SIZES};
pub use roster::{Roster, RosterSummary, ViewState};
