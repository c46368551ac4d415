pub mod feed;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::articles_client::ArticlesClient;
use std::sync::Arc;

/// The frontend always listens here.
pub const FRONTEND_PORT: u16 = 5173;

/// Shared application state containing the Data Service client
#[derive(Clone)]
pub struct AppState {
    pub articles_client: Arc<ArticlesClient>,
}

impl AppState {
    pub fn new(articles_client: Arc<ArticlesClient>) -> Self {
        Self { articles_client }
    }
}
