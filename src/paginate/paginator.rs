//! Page slicing

use serde::Serialize;

use super::errors::{PaginationError, PaginationResult};

/// One page of a larger result set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    /// Size of the full set, not of this page
    pub total_count: usize,
}

impl<T> Page<T> {
    /// Number of pages needed for `total_count` items
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    /// Returns true when a later page holds items
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maps page items, keeping the page metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

/// Slices sets into pages
pub struct Paginator;

impl Paginator {
    /// Returns page `page_number` (1-based) of `items`.
    ///
    /// Pages beyond the last are empty. Zero `page_number` or `page_size`
    /// fail with [`PaginationError::InvalidArgument`].
    pub fn paginate<T: Clone>(
        items: &[T],
        page_number: usize,
        page_size: usize,
    ) -> PaginationResult<Page<T>> {
        if page_size == 0 {
            return Err(PaginationError::InvalidArgument(
                "page_size must be > 0".to_string(),
            ));
        }
        if page_number == 0 {
            return Err(PaginationError::InvalidArgument(
                "page_number is 1-based and must be > 0".to_string(),
            ));
        }

        let start = (page_number - 1).saturating_mul(page_size).min(items.len());
        let end = start.saturating_add(page_size).min(items.len());

        Ok(Page {
            items: items[start..end].to_vec(),
            page_number,
            page_size,
            total_count: items.len(),
        })
    }
}
