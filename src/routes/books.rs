use crate::error::ApiError;
use crate::models::responses::BooksResponse;
use crate::utils::query::first_param;
use crate::SharedState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use tracing::{debug, info};

const DEFAULT_PAGE: u32 = 1;
const PAGE_PARAM: &str = "pageNumber";

/// Reads the leading digits of `raw`, after an optional `+`, as a page number.
/// Anything that does not yield a positive number falls back to page 1.
pub fn parse_page_number(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_PAGE;
    };
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end]
        .parse::<u32>()
        .ok()
        .filter(|&page| page > 0)
        .unwrap_or(DEFAULT_PAGE)
}

pub async fn get_books(
    Query(params): Query<Vec<(String, String)>>,
    State(state): State<SharedState>,
) -> Result<Json<BooksResponse>, ApiError> {
    let page = parse_page_number(first_param(&params, PAGE_PARAM));

    if let Some(books) = state.cache.get(page) {
        debug!("Cache hit for page {}", page);
        return Ok(Json(BooksResponse {
            page,
            cached: true,
            books,
        }));
    }

    debug!("Cache miss for page {}", page);
    let books = state
        .catalogue
        .fetch_page(page)
        .await
        .ok_or(ApiError::PageNotFound)?;

    info!("Scraped {} books from page {}", books.len(), page);
    if !state.cache.put(page, books.clone()) {
        debug!("Page {} was cached by a concurrent request", page);
    }

    Ok(Json(BooksResponse {
        page,
        cached: false,
        books,
    }))
}
