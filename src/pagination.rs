//! Pagination primitives shared by repository listings.

use serde::{Deserialize, Serialize};

/// One-based page selection for repository listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per: u32,
}

impl PageRequest {
    /// Creates a page request; `page` and `per` are clamped to at least 1.
    #[must_use]
    pub const fn new(page: u32, per: u32) -> Self {
        Self {
            page: if page == 0 { 1 } else { page },
            per: if per == 0 { 1 } else { per },
        }
    }

    /// Returns the one-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn per(self) -> u32 {
        self.per
    }

    /// Returns the number of leading records this request skips.
    #[must_use]
    pub const fn offset(self) -> u64 {
        (self.page as u64 - 1) * self.per as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

/// A page of items together with the total number of matching records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
}

impl<T> Page<T> {
    /// Creates a page from its items and the total record count.
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Builds a page by slicing an in-memory collection.
    #[must_use]
    pub fn from_slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = all
            .iter()
            .skip(skip)
            .take(request.per() as usize)
            .cloned()
            .collect();
        Self {
            items,
            total: all.len() as u64,
        }
    }

    /// Returns the items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the total number of matching records across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when this page carries no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
