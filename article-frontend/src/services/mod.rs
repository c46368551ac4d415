pub mod articles_client;
pub mod metrics;
