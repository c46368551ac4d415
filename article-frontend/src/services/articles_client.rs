//! HTTP client for the Data Service's article list.

use crate::models::Article;
use reqwest::StatusCode;
use thiserror::Error;

/// The Data Service address. There is no discovery: it always runs locally on 8000.
pub const ARTICLES_ENDPOINT: &str = "http://localhost:8000/api/articles";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to article service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("article service answered {status} with a body that is not an article list: {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

pub struct ArticlesClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ArticlesClient {
    pub fn new() -> Self {
        Self::with_endpoint(ARTICLES_ENDPOINT)
    }

    /// Point the client somewhere other than the local Data Service.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the article list once. The status code is not inspected: any
    /// body that parses as a list is accepted, anything else is an error.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>, ClientError> {
        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { status, source })
    }
}

impl Default for ArticlesClient {
    fn default() -> Self {
        Self::new()
    }
}
