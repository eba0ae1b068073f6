use std::sync::Arc;

use anyhow::Result;
use doc_reminders_http::{AppState, create_router};
use doc_reminders_storage::StorageBackend;
use doc_reminders_storage::traits::HealthStore;

pub(crate) async fn run(storage: Arc<StorageBackend>, host: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState::new(Arc::clone(&storage)));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(backend = storage.kind(), "Starting HTTP server on {}", addr);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    storage.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        return;
    }
    tracing::info!("Shutdown requested");
}
