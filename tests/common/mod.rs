use books_service::{app, config::Config, AppState};
use std::sync::Arc;
use std::time::Duration;

pub const CATALOGUE_PAGE: &str = include_str!("../fixtures/catalogue_page.html");

/// Starts the service on an ephemeral port and returns its base URL.
pub async fn spawn_app(catalogue_base_url: &str, search_api_url: &str) -> String {
    let config = Config {
        port: 0,
        catalogue_base_url: catalogue_base_url.to_string(),
        search_api_url: search_api_url.to_string(),
        http_timeout: Duration::from_secs(5),
    };
    let state = AppState::from_config(&config).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(Arc::new(state))).await.unwrap();
    });

    format!("http://{}", addr)
}
