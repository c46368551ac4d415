use crate::config::ArticleConfig;
use crate::error::ApiError;
use crate::handlers;
use crate::services::{ArticleStore, MongoDb};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Connection state of the article store as seen by request handlers.
///
/// A running process never goes from `Connected` back to `Disconnected`.
#[derive(Clone)]
pub enum StoreHandle {
    Disconnected,
    Connected(Arc<dyn ArticleStore>),
}

#[derive(Clone)]
pub struct AppState {
    store: StoreHandle,
}

impl AppState {
    pub fn connected(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            store: StoreHandle::Connected(store),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            store: StoreHandle::Disconnected,
        }
    }

    pub fn store(&self) -> Result<&Arc<dyn ArticleStore>, ApiError> {
        match &self.store {
            StoreHandle::Connected(store) => Ok(store),
            StoreHandle::Disconnected => Err(ApiError::NotConnected),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(CorsLayer::permissive())
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    db: MongoDb,
}

impl Application {
    /// Connect to the store, then bind. Nothing listens until the store answers.
    pub async fn build(config: ArticleConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let app = build_router(AppState::connected(Arc::new(db.clone())));

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server is running on http://localhost:{}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            db,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
