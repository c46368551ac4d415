use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::error::AppError;

/// Read side of the article collection.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Every stored article, newest `publication_date` first.
    async fn list_newest_first(&self) -> Result<Vec<Document>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
