use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use service_core::error::AppError;
use thiserror::Error;

pub const NOT_CONNECTED_MESSAGE: &str = "Database connection not established.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch articles.";

/// Failures surfaced by the article API. The body only ever carries one of
/// the fixed messages above; store details stay in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("database connection not established")]
    NotConnected,

    #[error("failed to fetch articles: {0}")]
    FetchFailed(#[source] AppError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::NotConnected => NOT_CONNECTED_MESSAGE,
            ApiError::FetchFailed(_) => FETCH_FAILED_MESSAGE,
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: message }),
        )
            .into_response()
    }
}
