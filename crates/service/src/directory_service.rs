use std::sync::Arc;

use doc_reminders_core::{DOCUMENT_TITLE_MAX_LEN, Document, USERNAME_MAX_LEN, User};
use doc_reminders_storage::StorageBackend;
use doc_reminders_storage::traits::{DocumentStore, UserStore};

use crate::ServiceError;

/// Users and documents. These have no HTTP surface and are managed from the CLI.
pub struct DirectoryService {
    storage: Arc<StorageBackend>,
}

impl DirectoryService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn create_user(&self, username: &str) -> Result<User, ServiceError> {
        let username = required_text("username", username, USERNAME_MAX_LEN)?;
        let user = self.storage.create_user(username).await?;
        tracing::info!(id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.storage.list_users().await?)
    }

    pub async fn create_document(&self, title: &str) -> Result<Document, ServiceError> {
        let title = required_text("title", title, DOCUMENT_TITLE_MAX_LEN)?;
        let document = self.storage.create_document(title).await?;
        tracing::info!(id = document.id, "document created");
        Ok(document)
    }

    pub async fn list_documents(&self) -> Result<Vec<Document>, ServiceError> {
        Ok(self.storage.list_documents().await?)
    }
}

fn required_text<'a>(field: &str, value: &'a str, max_len: usize) -> Result<&'a str, ServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(ServiceError::InvalidInput(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use crate::test_support::seeded_backend;

    #[tokio::test]
    async fn creates_trimmed_user() {
        let (storage, _dir) = seeded_backend().await;
        let service = DirectoryService::new(storage);

        let user = service.create_user("  carol ").await.unwrap();
        assert_eq!(user.username, "carol");
        assert_eq!(service.list_users().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn duplicate_username_is_conflict() {
        let (storage, _dir) = seeded_backend().await;
        let service = DirectoryService::new(storage);

        let err = service.create_user("testuser1").await.unwrap_err();
        assert!(err.is_duplicate());
    }

    #[tokio::test]
    async fn rejects_blank_and_oversized_input() {
        let (storage, _dir) = seeded_backend().await;
        let service = DirectoryService::new(storage);

        assert!(matches!(
            service.create_document("   ").await,
            Err(ServiceError::InvalidInput(_))
        ));
        let long_name = "x".repeat(USERNAME_MAX_LEN + 1);
        assert!(matches!(
            service.create_user(&long_name).await,
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn lists_documents_in_id_order() {
        let (storage, _dir) = seeded_backend().await;
        let service = DirectoryService::new(storage);
        let doc = service.create_document("Vendor contract").await.unwrap();

        let titles: Vec<String> =
            service.list_documents().await.unwrap().into_iter().map(|d| d.title).collect();
        assert_eq!(titles, ["Test Document 1", "Test Document 2", doc.title.as_str()]);
    }
}
