use crate::models::book::SearchResult;
use crate::models::gutendex::{GutendexBook, GutendexResponse};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

const PLAIN_TEXT: &str = "text/plain";
const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Missing search query")]
    MissingQuery,
    #[error("Search upstream error: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        if query.is_empty() {
            return Err(SearchError::MissingQuery);
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("search", query)])
            .send()
            .await?
            .error_for_status()?;

        let body: GutendexResponse = response.json().await?;
        let upstream_count = body.results.len();
        let results = reshape_results(body.results);

        info!(
            "Search '{}' returned {} results, {} with plain text",
            query,
            upstream_count,
            results.len()
        );
        Ok(results)
    }
}

/// Numbers upstream results from 1, then drops the ones without a plain-text
/// download. Surviving entries keep their original index; entries that do not
/// decode are skipped but still count.
pub fn reshape_results(entries: Vec<Value>) -> Vec<SearchResult> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let book: GutendexBook = match serde_json::from_value(entry) {
                Ok(book) => book,
                Err(e) => {
                    warn!("Skipping search result {}: {}", i + 1, e);
                    return None;
                }
            };
            let text_url = plain_text_url(&book)?;
            let author = book
                .authors
                .into_iter()
                .next()
                .and_then(|a| a.name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

            Some(SearchResult {
                id: book.id,
                index: i + 1,
                title: book.title.unwrap_or_default(),
                author,
                text_url,
            })
        })
        .collect()
}

fn plain_text_url(book: &GutendexBook) -> Option<String> {
    book.formats
        .iter()
        .find(|(mime, _)| mime.contains(PLAIN_TEXT))
        .and_then(|(_, url)| url.as_str())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}
