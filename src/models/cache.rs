use crate::models::book::BookSummary;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Process-lifetime cache of scraped catalogue pages.
///
/// Entries are never evicted and never overwritten: the first successful
/// scrape of a page is what every later request sees. The map is unbounded,
/// which is fine for a catalogue with a fixed number of pages.
#[derive(Debug, Clone, Default)]
pub struct PageCache {
    pages: Arc<RwLock<HashMap<u32, Vec<BookSummary>>>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, page: u32) -> Option<Vec<BookSummary>> {
        self.pages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&page)
            .cloned()
    }

    /// Stores `books` for `page` unless the page is already cached.
    /// Returns `true` if this call populated the entry.
    pub fn put(&self, page: u32, books: Vec<BookSummary>) -> bool {
        let mut pages = self.pages.write().unwrap_or_else(PoisonError::into_inner);
        if pages.contains_key(&page) {
            return false;
        }
        pages.insert(page, books);
        true
    }

    pub fn len(&self) -> usize {
        self.pages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached page numbers in ascending order.
    pub fn pages(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self
            .pages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        pages.sort_unstable();
        pages
    }
}
