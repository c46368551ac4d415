pub mod articles;
pub mod health;
pub mod metrics;

pub use articles::list_articles;
pub use health::health_check;
pub use metrics::metrics_endpoint;
