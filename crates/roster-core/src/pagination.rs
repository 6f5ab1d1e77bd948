//! Pagination
//!
//! Page-size set, page-count math and slicing. Pages are 1-based.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::InvalidPageSize;

/// Allowed rows-per-page choices
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Rows per page, always one of `PAGE_SIZES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub const DEFAULT: PageSize = PageSize(PAGE_SIZES[0]);

    pub fn get(self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = PageSize> {
        PAGE_SIZES.into_iter().map(PageSize)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if PAGE_SIZES.contains(&value) {
            Ok(PageSize(value))
        } else {
            Err(InvalidPageSize(value))
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Previous/next navigation intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

/// `ceil(count / page_size)`; zero when there is nothing to show
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get())
}

/// Index range of `page` within a list of `len` items, clamped to `len`
pub fn page_range(page: usize, page_size: PageSize, len: usize) -> Range<usize> {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = page.saturating_mul(size).min(len);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    &items[page_range(page, page_size, items.len())]
}

/// Move one page in `direction`; stays put at either boundary
pub fn step_page(current: usize, direction: PageDirection, total_pages: usize) -> usize {
    match direction {
        PageDirection::Previous if current > 1 => current - 1,
        PageDirection::Next if current < total_pages => current + 1,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::try_from(n).unwrap()
    }

    #[test]
    fn test_page_size_set() {
        assert_eq!(PageSize::all().map(PageSize::get).collect::<Vec<_>>(), vec![10, 25, 50, 100]);
        assert_eq!(PageSize::default().get(), 10);
        assert_eq!(PageSize::try_from(20), Err(InvalidPageSize(20)));
        assert_eq!(PageSize::try_from(0), Err(InvalidPageSize(0)));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, size(10)), 0);
        assert_eq!(total_pages(1, size(10)), 1);
        assert_eq!(total_pages(10, size(10)), 1);
        assert_eq!(total_pages(11, size(10)), 2);
        assert_eq!(total_pages(23, size(10)), 3);
        assert_eq!(total_pages(826, size(25)), 34);
        assert_eq!(total_pages(100, size(100)), 1);
    }

    #[test]
    fn test_last_page_is_short() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(page_slice(&items, 1, size(10)), &items[0..10]);
        assert_eq!(page_slice(&items, 3, size(10)), &[21, 22, 23]);
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(page_slice(&items, 2, size(10)).is_empty());
        assert!(page_slice(&items, 0, size(10)).is_empty());
        assert_eq!(page_range(usize::MAX, size(100), 5), 5..5);
    }

    #[test]
    fn test_step_is_clamped() {
        assert_eq!(step_page(1, PageDirection::Previous, 3), 1);
        assert_eq!(step_page(2, PageDirection::Previous, 3), 1);
        assert_eq!(step_page(2, PageDirection::Next, 3), 3);
        assert_eq!(step_page(3, PageDirection::Next, 3), 3);
        assert_eq!(step_page(1, PageDirection::Next, 0), 1);
    }
}
