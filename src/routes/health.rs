use crate::models::responses::HealthResponse;
use crate::SharedState;
use axum::{extract::State, response::Json};

pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    let pages = state.cache.pages();

    Json(HealthResponse {
        service: "books-service".to_string(),
        status: "running".to_string(),
        cached_pages: pages.len(),
        pages,
        started_at: state.started_at.to_rfc3339(),
    })
}
