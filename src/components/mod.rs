//! UI Components
//!
//! Presentation for the roster. Components read the store and report
//! user intent back through `Roster` update functions.

mod character_detail;
mod character_table;
mod filter_bar;
mod option_select;
mod page_size_selector;
mod pagination_controls;

pub use character_detail::CharacterDetailPanel;
pub use character_table::CharacterTable;
pub use filter_bar::FilterBar;
pub use option_select::OptionSelect;
pub use page_size_selector::PageSizeSelector;
pub use pagination_controls::PaginationControls;
