//! Building blocks of the store state: a remote list remembered together
//! with the filter that produced it, and a single remote value.

use crate::shared::gateway::Page;
use contracts::shared::Pagination;

/// A list read from the server. Replaced wholesale on every successful
/// fetch; a failed fetch leaves the previous items in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSlice<T, F> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
    /// Filter of the last fetch, reused when the list is invalidated
    pub filter: F,
    pub is_loading: bool,
}

impl<T, F: Default> Default for ListSlice<T, F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            filter: F::default(),
            is_loading: false,
        }
    }
}

impl<T, F> ListSlice<T, F> {
    pub fn begin(&mut self, filter: F) {
        self.filter = filter;
        self.is_loading = true;
    }

    pub fn fill(&mut self, page: Page<T>) {
        self.items = page.items;
        self.pagination = page.pagination;
        self.is_loading = false;
    }

    pub fn fail(&mut self) {
        self.is_loading = false;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single remote value, `None` until first loaded
#[derive(Debug, Clone, PartialEq)]
pub struct DataSlice<T> {
    pub data: Option<T>,
    pub is_loading: bool,
}

impl<T> Default for DataSlice<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
        }
    }
}

impl<T> DataSlice<T> {
    pub fn begin(&mut self) {
        self.is_loading = true;
    }

    pub fn fill(&mut self, data: T) {
        self.data = Some(data);
        self.is_loading = false;
    }

    pub fn fail(&mut self) {
        self.is_loading = false;
    }
}
