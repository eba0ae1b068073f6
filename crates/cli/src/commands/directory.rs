use std::sync::Arc;

use anyhow::Result;
use doc_reminders_service::DirectoryService;
use doc_reminders_storage::StorageBackend;

use super::print_json;

pub(crate) async fn add_user(storage: Arc<StorageBackend>, username: &str) -> Result<()> {
    let user = DirectoryService::new(storage).create_user(username).await?;
    print_json(&user)
}

pub(crate) async fn list_users(storage: Arc<StorageBackend>) -> Result<()> {
    let users = DirectoryService::new(storage).list_users().await?;
    print_json(&users)
}

pub(crate) async fn add_document(storage: Arc<StorageBackend>, title: &str) -> Result<()> {
    let document = DirectoryService::new(storage).create_document(title).await?;
    print_json(&document)
}

pub(crate) async fn list_documents(storage: Arc<StorageBackend>) -> Result<()> {
    let documents = DirectoryService::new(storage).list_documents().await?;
    print_json(&documents)
}
