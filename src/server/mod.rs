pub mod run_app;

use crate::adapters::apify::ApifyClient;
use crate::adapters::nocodb::NocoDbClient;
use crate::adapters::build_http_client;
use crate::config::ServiceConfig;
use crate::core::sync::SyncEngine;
use crate::utils::error::Result;
use axum::routing::post;
use axum::{Extension, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub type DefaultEngine = SyncEngine<ApifyClient, NocoDbClient>;

pub struct AppState {
    pub engine: DefaultEngine,
}

impl AppState {
    pub fn new(engine: DefaultEngine) -> Self {
        Self { engine }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Ok(Self::new(build_engine(config)?))
    }
}

/// Wires the real Apify and NocoDB clients around one shared HTTP client.
pub fn build_engine(config: &ServiceConfig) -> Result<DefaultEngine> {
    let client = build_http_client(config)?;
    let source = ApifyClient::new(client.clone(), config)?;
    let sink = NocoDbClient::new(client, config)?;
    tracing::debug!(
        "Sync engine wired: {} -> {}",
        source.dataset_url(),
        sink.records_url()
    );
    Ok(SyncEngine::new(source, sink))
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/run-app", post(run_app::run_app))
        .layer(Extension(Arc::new(state)))
        .layer(TraceLayer::new_for_http())
}

#[tracing::instrument(level = "info", skip_all)]
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
