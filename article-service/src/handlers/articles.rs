use crate::error::ApiError;
use crate::models::document_to_json;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// `GET /api/articles`: the whole collection, newest first.
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let store = state.store()?;

    let documents = store.list_newest_first().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch articles");
        ApiError::FetchFailed(e)
    })?;

    Ok(Json(documents.into_iter().map(document_to_json).collect()))
}
