use crate::models::responses::ErrorResponse;
use crate::services::search::SearchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Failures surfaced to HTTP clients as `{ "error": ... }`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Page not found or failed to scrape.")]
    PageNotFound,
    #[error("Missing search query.")]
    MissingQuery,
    #[error("Failed to fetch book search.")]
    SearchFailed,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::PageNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::SearchFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::MissingQuery => ApiError::MissingQuery,
            SearchError::Upstream(_) => ApiError::SearchFailed,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::PageNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::MissingQuery.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::SearchFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_query_maps_to_bad_request() {
        let err = ApiError::from(SearchError::MissingQuery);
        assert!(matches!(err, ApiError::MissingQuery));
    }

    #[test]
    fn into_response_keeps_status() {
        let response = ApiError::PageNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
