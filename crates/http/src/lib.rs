//! HTTP API server for doc-reminders.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use doc_reminders_service::ReminderService;
use doc_reminders_storage::StorageBackend;
use doc_reminders_storage::traits::HealthStore;

pub use response_types::{ReadinessResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for sharing across handlers. Holds no per-request data.
pub struct AppState {
    /// Storage handle, used directly only for readiness probes
    pub storage: Arc<StorageBackend>,
    /// Reminder log lifecycle operations
    pub reminder_service: Arc<ReminderService>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        let reminder_service = Arc::new(ReminderService::new(Arc::clone(&storage)));
        Self { storage, reminder_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route(
            "/api/reminders",
            get(handlers::reminders::list_reminders).post(handlers::reminders::create_reminder),
        )
        .route("/api/reminders/{id}", put(handlers::reminders::update_reminder_status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadinessResponse>) {
    match state.storage.ping().await {
        Ok(()) => (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None })),
        Err(e) => {
            tracing::warn!(error = %e, backend = state.storage.kind(), "readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable",
                    message: Some("database unavailable"),
                }),
            )
        },
    }
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
