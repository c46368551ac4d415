#![allow(dead_code)]

use article_service::config::ArticleConfig;
use article_service::services::{ArticleStore, MongoDb};
use article_service::startup::Application;
use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use uuid::Uuid;

pub const MONGO_URI: &str = "mongodb://localhost:27017";

/// Store that returns a fixed list, in the order given.
pub struct FixedStore(pub Vec<Document>);

#[async_trait]
impl ArticleStore for FixedStore {
    async fn list_newest_first(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.0.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store whose queries always fail, as during a transient outage.
pub struct FailingStore;

#[async_trait]
impl ArticleStore for FailingStore {
    async fn list_newest_first(&self) -> Result<Vec<Document>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "connection reset by peer (replica set primary stepped down)"
        )))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("server selection timeout")))
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    /// Spawn the real service against a fresh database on the local MongoDB.
    pub async fn spawn() -> Self {
        let db_name = format!("article_test_{}", Uuid::new_v4());

        let mut config = ArticleConfig::from_lookup(CoreConfig::default(), |key| match key {
            "MONGO_URI" => Some(MONGO_URI.to_string()),
            "MONGO_DATABASE" => Some(db_name.clone()),
            _ => None,
        })
        .expect("Failed to build configuration");
        config.port = 0; // Random port for testing

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    pub async fn get_articles(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/api/articles", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
