//! Error Types
//!
//! Acquisition is the only fallible part of the roster.

use thiserror::Error;

/// Result type for acquisition
pub type FetchResult<T> = Result<T, FetchError>;

/// Any failure while walking the page chain. The whole load is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("gave up after {limit} pages, the next-page chain did not end")]
    PageLimit { limit: usize },
}

impl FetchError {
    pub fn transport(url: &str, message: impl Into<String>) -> Self {
        FetchError::Transport { url: url.to_string(), message: message.into() }
    }

    pub fn decode(url: &str, message: impl Into<String>) -> Self {
        FetchError::Decode { url: url.to_string(), message: message.into() }
    }
}

/// Page size outside the allowed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid page size {0}, expected one of 10, 25, 50, 100")]
pub struct InvalidPageSize(pub usize);
