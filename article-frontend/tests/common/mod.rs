#![allow(dead_code)]

use article_frontend::feed::ArticleFeed;
use article_frontend::services::articles_client::ArticlesClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens on port 1, so requests fail with connection refused.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1/api/articles";

pub fn sample_articles() -> Value {
    json!([
        {
            "_id": "65f1c0ffee00000000000003",
            "title": "March release",
            "summary": "Third article",
            "url": "https://example.com/march",
            "thumbnail_url": "https://example.com/march.png",
            "author": "Alice",
            "publication_date": "2024-03-01"
        },
        {
            "_id": "65f1c0ffee00000000000002",
            "title": "February release",
            "summary": "Second article",
            "url": "https://example.com/february",
            "thumbnail_url": "https://example.com/february.png",
            "author": "Bob",
            "publication_date": "2024-02-01"
        },
        {
            "_id": "65f1c0ffee00000000000001",
            "title": "January release",
            "summary": "First article",
            "url": "https://example.com/january",
            "thumbnail_url": "https://example.com/january.png",
            "author": "Carol",
            "publication_date": "2024-01-01"
        }
    ])
}

/// Mock Data Service answering `GET /api/articles` with the given response.
pub async fn article_service(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

pub fn client_for(server: &MockServer) -> ArticlesClient {
    ArticlesClient::with_endpoint(format!("{}/api/articles", server.uri()))
}

pub async fn loaded_feed(body: Value) -> ArticleFeed {
    let server = article_service(ResponseTemplate::new(200).set_body_json(body)).await;
    let mut feed = ArticleFeed::new();
    feed.load(&client_for(&server)).await;
    feed
}

pub fn card_count(html: &str) -> usize {
    html.matches("class=\"article-card\"").count()
}
