use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// The Data Service always listens here; the frontend is hardcoded to it.
pub const ARTICLE_SERVICE_PORT: u16 = 8000;

/// Database used when `MONGO_URI` does not name one.
pub const DEFAULT_DATABASE: &str = "blog_moderateur";

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    /// Fallback database name, only consulted when the URI has no default database.
    pub database: String,
}

impl ArticleConfig {
    /// Read the MongoDB settings from the process environment.
    pub fn from_env(common: core_config::Config) -> Result<Self, AppError> {
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(ArticleConfig {
            common,
            mongodb: MongoConfig {
                uri: required(&lookup, "MONGO_URI")?,
                database: lookup("MONGO_DATABASE")
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            },
            port: ARTICLE_SERVICE_PORT,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required but not set",
            key
        ))),
    }
}
