//! Roster Configuration

use serde::{Deserialize, Serialize};

use crate::pagination::PageSize;

/// First page of the public character API
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// How pages are concatenated once the chain is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOrder {
    /// Pages in arrival order, first page first
    #[default]
    FirstPageFirst,
    /// Pages reached through `next` first, the first page's records last
    ContinuationFirst,
}

impl PageOrder {
    pub fn assemble<T>(self, first: Vec<T>, continuation: Vec<T>) -> Vec<T> {
        let (mut head, tail) = match self {
            PageOrder::FirstPageFirst => (first, continuation),
            PageOrder::ContinuationFirst => (continuation, first),
        };
        head.extend(tail);
        head
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub base_endpoint: String,
    pub page_order: PageOrder,
    /// Upper bound on pages fetched, first page included. `None` = follow until `next` is null.
    pub max_pages: Option<usize>,
    pub default_page_size: PageSize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            base_endpoint: DEFAULT_ENDPOINT.to_string(),
            page_order: PageOrder::default(),
            max_pages: None,
            default_page_size: PageSize::default(),
        }
    }
}

impl RosterConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            base_endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}
