use crate::models::book::{BookSummary, SearchResult};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub cached_pages: usize,
    pub pages: Vec<u32>,
    pub started_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BooksResponse {
    pub page: u32,
    pub cached: bool,
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookSearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
