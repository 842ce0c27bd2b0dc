use serde::{Deserialize, Serialize};

/// One product card scraped from a catalogue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub title: String,
    /// Display price, currency symbol included.
    pub price: String,
    /// Absolute cover image URL.
    pub image: String,
}

/// A search hit that has a plain-text download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    /// 1-based position in the upstream response, before filtering.
    pub index: usize,
    pub title: String,
    pub author: String,
    pub text_url: String,
}
