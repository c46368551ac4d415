use article_frontend::services::articles_client::ArticlesClient;
use article_frontend::startup::build_router;
use article_frontend::{AppState, FRONTEND_PORT};
use service_core::config::Config;
use service_core::observability::logging::init_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = Config::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "article-frontend",
        &configuration.log_level,
        configuration.otlp_endpoint.as_deref(),
    );

    article_frontend::services::metrics::init_metrics();

    let articles_client = Arc::new(ArticlesClient::new());
    info!(endpoint = %articles_client.endpoint(), "Using article service");

    let app = build_router(AppState::new(articles_client));

    let address = format!("0.0.0.0:{}", FRONTEND_PORT);
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting article-frontend on http://localhost:{}", FRONTEND_PORT);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
