use crate::models::book::BookSummary;
use crate::utils::url::{absolute_image_url, page_url};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;

const PRODUCT_CARD: &str = ".product_pod";
const TITLE_LINK: &str = "h3 a";
const PRICE: &str = ".price_color";
const IMAGE: &str = "img";

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Catalogue returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct CatalogueClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogueClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Scrapes one catalogue page.
    ///
    /// Every failure (unreachable site, non-2xx status, unreadable body) comes
    /// back as `None`; the site answers out-of-range pages with a 404, so that
    /// is also how the end of the catalogue shows up.
    pub async fn fetch_page(&self, page: u32) -> Option<Vec<BookSummary>> {
        match self.try_fetch_page(page).await {
            Ok(books) => Some(books),
            Err(e) => {
                debug!("Catalogue page {} unavailable: {}", page, e);
                None
            }
        }
    }

    async fn try_fetch_page(&self, page: u32) -> Result<Vec<BookSummary>, CatalogueError> {
        let url = page_url(&self.base_url, page);
        debug!("Fetching catalogue page {} from {}", page, url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogueError::Status(response.status()));
        }

        let html = response.text().await?;
        parse_catalogue_page(&html, &self.base_url)
    }
}

fn selector(css: &'static str) -> Result<Selector, CatalogueError> {
    Selector::parse(css).map_err(|e| CatalogueError::Selector {
        selector: css,
        reason: e.to_string(),
    })
}

/// Extracts every product card of a catalogue page, in document order.
pub fn parse_catalogue_page(html: &str, base_url: &str) -> Result<Vec<BookSummary>, CatalogueError> {
    let card_sel = selector(PRODUCT_CARD)?;
    let title_sel = selector(TITLE_LINK)?;
    let price_sel = selector(PRICE)?;
    let image_sel = selector(IMAGE)?;

    let document = Html::parse_document(html);

    let books = document
        .select(&card_sel)
        .map(|card| {
            let title = first_attr(card, &title_sel, "title").unwrap_or_default();
            let price = card
                .select(&price_sel)
                .next()
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default();
            let image = first_attr(card, &image_sel, "src")
                .filter(|src| !src.is_empty())
                .map(|src| absolute_image_url(base_url, &src))
                .unwrap_or_default();

            BookSummary {
                title,
                price,
                image,
            }
        })
        .collect();

    Ok(books)
}

fn first_attr(card: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    card.select(sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}
