//! View state of the article page.

use crate::models::Article;
use crate::services::articles_client::ArticlesClient;

/// What the page shows: a loading indicator until the one fetch resolves,
/// then the articles in the order the Data Service sent them.
#[derive(Debug, Clone)]
pub struct ArticleFeed {
    articles: Vec<Article>,
    loading: bool,
}

impl ArticleFeed {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Fetch the articles. Only the first call does anything.
    ///
    /// Failures leave the feed empty; they are logged and never shown.
    pub async fn load(&mut self, client: &ArticlesClient) {
        if !self.loading {
            return;
        }

        match client.fetch_articles().await {
            Ok(articles) => {
                tracing::debug!(count = articles.len(), "Fetched articles");
                self.articles = articles;
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %client.endpoint(),
                    error = %e,
                    "Error fetching articles"
                );
            }
        }

        self.loading = false;
    }
}

impl Default for ArticleFeed {
    fn default() -> Self {
        Self::new()
    }
}
