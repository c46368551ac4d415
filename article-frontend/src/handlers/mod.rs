pub mod app;
pub mod articles;
pub mod metrics;
