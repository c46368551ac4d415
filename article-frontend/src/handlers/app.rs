use crate::feed::ArticleFeed;
use askama::Template;
use axum::response::IntoResponse;

/// Page shell. The feed starts in its loading state and fetches itself once.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub feed: ArticleFeed,
}

pub async fn index() -> impl IntoResponse {
    IndexTemplate {
        feed: ArticleFeed::new(),
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
