//! Roster State
//!
//! Application state for one session: the fetched collection, filter
//! criteria and view state. Every mutation goes through an update function
//! that recomputes the derived view before returning.

use crate::acquisition::LoadState;
use crate::config::RosterConfig;
use crate::error::FetchResult;
use crate::filter::{self, FilterCriteria};
use crate::models::{Character, CharacterDetail};
use crate::options;
use crate::pagination::{self, PageDirection, PageSize};

/// Pagination and selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// 1-based
    pub current_page: usize,
    pub page_size: PageSize,
    /// Id of the record shown in the detail panel
    pub selected: Option<u32>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PageSize::default(),
            selected: None,
        }
    }
}

/// Counts for the page indicator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub total: usize,
    pub matched: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    load: LoadState,
    records: Vec<Character>,
    filters: FilterCriteria,
    view: ViewState,
    // derived
    filtered: Vec<usize>,
    total_pages: usize,
}

impl Roster {
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            view: ViewState {
                page_size: config.default_page_size,
                ..ViewState::default()
            },
            ..Default::default()
        }
    }

    // ========================
    // Acquisition
    // ========================

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn begin_loading(&mut self) -> bool {
        self.load.begin()
    }

    /// Publish the load outcome. Records are only installed on success,
    /// and only for the load that is in flight.
    pub fn finish_loading(&mut self, result: FetchResult<Vec<Character>>) {
        match result {
            Ok(records) => {
                if self.load.finish(Ok(())) {
                    self.records = records;
                    self.recompute();
                }
            }
            Err(e) => {
                self.load.finish(Err(&e));
            }
        }
    }

    pub fn records(&self) -> &[Character] {
        &self.records
    }

    // ========================
    // Filters
    // ========================

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        if self.filters != filters {
            self.filters = filters;
            self.recompute();
        }
    }

    pub fn set_name_filter(&mut self, name: &str) {
        let mut filters = self.filters.clone();
        filters.set_name(name);
        self.set_filters(filters);
    }

    pub fn set_status_filter(&mut self, status: &str) {
        let mut filters = self.filters.clone();
        filters.set_status(status);
        self.set_filters(filters);
    }

    pub fn set_species_filter(&mut self, species: &str) {
        let mut filters = self.filters.clone();
        filters.set_species(species);
        self.set_filters(filters);
    }

    pub fn status_options(&self) -> Vec<String> {
        options::status_options(&self.records)
    }

    pub fn species_options(&self) -> Vec<String> {
        options::species_options(&self.records)
    }

    // ========================
    // Pagination
    // ========================

    pub fn page_size(&self) -> PageSize {
        self.view.page_size
    }

    /// Always returns to page 1, even if the size is unchanged
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.view.page_size = page_size;
        self.recompute();
    }

    pub fn current_page(&self) -> usize {
        self.view.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn can_step(&self, direction: PageDirection) -> bool {
        pagination::step_page(self.view.current_page, direction, self.total_pages) != self.view.current_page
    }

    /// Returns false when already at the boundary
    pub fn step_page(&mut self, direction: PageDirection) -> bool {
        let next = pagination::step_page(self.view.current_page, direction, self.total_pages);
        let moved = next != self.view.current_page;
        self.view.current_page = next;
        moved
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Character> + '_ {
        self.filtered.iter().map(|&i| &self.records[i])
    }

    /// Records on the current page, in filtered order
    pub fn page_items(&self) -> impl Iterator<Item = &Character> + '_ {
        pagination::page_slice(&self.filtered, self.view.current_page, self.view.page_size)
            .iter()
            .map(|&i| &self.records[i])
    }

    pub fn summary(&self) -> RosterSummary {
        RosterSummary {
            total: self.records.len(),
            matched: self.filtered.len(),
            current_page: self.view.current_page,
            total_pages: self.total_pages,
        }
    }

    // ========================
    // Selection
    // ========================

    /// Select by id; unknown ids leave the selection unchanged
    pub fn select(&mut self, id: u32) -> bool {
        if self.records.iter().any(|c| c.id == id) {
            self.view.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.view.selected = None;
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.view.selected
    }

    pub fn selected(&self) -> Option<&Character> {
        let id = self.view.selected?;
        self.records.iter().find(|c| c.id == id)
    }

    pub fn selected_detail(&self) -> Option<CharacterDetail> {
        self.selected().map(CharacterDetail::from)
    }

    fn recompute(&mut self) {
        let result = filter::recompute(&self.records, &self.filters, self.view.page_size);
        self.filtered = result.filtered;
        self.total_pages = result.total_pages;
        self.view.current_page = 1;
    }
}
