//! Shared fixtures for service tests.

use std::sync::Arc;

use doc_reminders_storage::StorageBackend;
use doc_reminders_storage::traits::{DocumentStore, UserStore};
use tempfile::TempDir;

/// Backend on a temp SQLite file, seeded with users 1-2 and documents 1-2.
#[expect(clippy::unwrap_used, reason = "test code")]
pub async fn seeded_backend() -> (Arc<StorageBackend>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let backend = StorageBackend::new_sqlite(&temp_dir.path().join("service.db")).await.unwrap();
    backend.create_user("testuser1").await.unwrap();
    backend.create_user("testuser2").await.unwrap();
    backend.create_document("Test Document 1").await.unwrap();
    backend.create_document("Test Document 2").await.unwrap();
    (Arc::new(backend), temp_dir)
}
