pub const DEFAULT_CATALOGUE_BASE_URL: &str = "http://books.toscrape.com";
pub const DEFAULT_SEARCH_API_URL: &str = "https://gutendex.com/books/";

pub fn page_url(base_url: &str, page: u32) -> String {
    format!(
        "{}/catalogue/page-{}.html",
        base_url.trim_end_matches('/'),
        page
    )
}

/// Turns a card's relative image path (`../media/...`) into an absolute URL
/// under the site root. Only the first `../` is dropped.
pub fn absolute_image_url(base_url: &str, src: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        src.replacen("../", "", 1)
    )
}
