use crate::error::ApiError;
use crate::models::responses::BookSearchResponse;
use crate::services::search::SearchError;
use crate::utils::query::first_param;
use crate::SharedState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use tracing::error;

const QUERY_PARAM: &str = "q";

pub async fn search_books(
    Query(params): Query<Vec<(String, String)>>,
    State(state): State<SharedState>,
) -> Result<Json<BookSearchResponse>, ApiError> {
    let query = first_param(&params, QUERY_PARAM).unwrap_or_default();

    match state.search.search(query).await {
        Ok(results) => Ok(Json(BookSearchResponse { results })),
        Err(e) => {
            if let SearchError::Upstream(ref cause) = e {
                error!("booksearch error: {}", cause);
            }
            Err(e.into())
        }
    }
}
