use crate::feed::ArticleFeed;
use crate::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse};

#[derive(Template)]
#[template(path = "partials/feed.html")]
pub struct FeedTemplate {
    pub feed: ArticleFeed,
}

/// Loaded feed fragment, swapped into the page shell by htmx.
pub async fn articles_fragment(State(state): State<AppState>) -> impl IntoResponse {
    let mut feed = ArticleFeed::new();
    feed.load(&state.articles_client).await;

    FeedTemplate { feed }
}
