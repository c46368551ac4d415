use crate::models::{ARTICLES_COLLECTION, PUBLICATION_DATE};
use crate::services::ArticleStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Connect and confirm the deployment answers before handing out a handle.
    ///
    /// Uses the database named in `uri`, or `fallback_database` when it has none.
    pub async fn connect(uri: &str, fallback_database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(fallback_database));

        let mongo = Self { client, db };
        mongo.health_check().await?;

        tracing::info!(
            database = %mongo.db.name(),
            "Successfully connected to MongoDB database"
        );
        Ok(mongo)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn articles(&self) -> Collection<Document> {
        self.db.collection(ARTICLES_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

pub(crate) fn newest_first() -> FindOptions {
    let mut sort = Document::new();
    sort.insert(PUBLICATION_DATE, -1);
    FindOptions::builder().sort(sort).build()
}

#[async_trait]
impl ArticleStore for MongoDb {
    async fn list_newest_first(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self.articles().find(doc! {}, newest_first()).await?;
        let articles: Vec<Document> = cursor.try_collect().await?;
        tracing::debug!(count = articles.len(), "Fetched articles");
        Ok(articles)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.health_check().await
    }
}
