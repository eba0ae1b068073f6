//! Test utilities and module declarations for storage tests.

use crate::SqliteStorage;
use crate::traits::{DocumentStore, UserStore};
use tempfile::TempDir;


#[expect(clippy::unwrap_used, reason = "test code")]
pub async fn create_test_storage() -> (SqliteStorage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = SqliteStorage::open(&db_path).await.unwrap();
    (storage, temp_dir)
}

/// Storage seeded with users 1-2 and documents 1-2.
#[expect(clippy::unwrap_used, reason = "test code")]
pub async fn create_seeded_storage() -> (SqliteStorage, TempDir) {
    let (storage, temp_dir) = create_test_storage().await;
    storage.create_user("testuser1").await.unwrap();
    storage.create_user("testuser2").await.unwrap();
    storage.create_document("Test Document 1").await.unwrap();
    storage.create_document("Test Document 2").await.unwrap();
    (storage, temp_dir)
}
