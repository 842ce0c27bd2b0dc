//! Scrapes the books.toscrape.com catalogue behind an in-memory page cache and
//! proxies Gutendex searches for books with a plain-text download.

use axum::{routing::get, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use config::Config;
use models::cache::PageCache;
use routes::{books::get_books, booksearch::search_books, health::health_check};
use services::{catalogue::CatalogueClient, search::SearchClient};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct AppState {
    pub cache: PageCache,
    pub catalogue: CatalogueClient,
    pub search: SearchClient,
    pub started_at: DateTime<Utc>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Both upstream clients share one connection pool.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            cache: PageCache::new(),
            catalogue: CatalogueClient::new(client.clone(), config.catalogue_base_url.clone()),
            search: SearchClient::new(client, config.search_api_url.clone()),
            started_at: Utc::now(),
        })
    }
}

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/books", get(get_books))
        .route("/booksearch", get(search_books))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
