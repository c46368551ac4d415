use article_service::config::ArticleConfig;
use article_service::services::init_metrics;
use article_service::startup::Application;
use service_core::config::Config as CoreConfig;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let core = CoreConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;
    init_tracing("article-service", &core.log_level, core.otlp_endpoint.as_deref());

    // Recorder must exist before the first request is recorded.
    init_metrics();

    let config = ArticleConfig::from_env(core).map_err(|e| {
        tracing::error!("FATAL: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("FATAL: failed to start article-service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
