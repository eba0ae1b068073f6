//! DocumentStore implementation for PgStorage.

use super::*;

use crate::traits::DocumentStore;

#[async_trait]
impl DocumentStore for PgStorage {
    async fn create_document(&self, title: &str) -> Result<Document, StorageError> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO documents (title) VALUES ($1) RETURNING id")
                .bind(title)
                .fetch_one(&self.pool)
                .await?;
        Ok(Document { id, title: title.to_owned() })
    }

    async fn get_document(&self, id: i64) -> Result<Option<Document>, StorageError> {
        sqlx::query("SELECT id, title FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .as_ref()
            .map(row_to_document)
            .transpose()
    }

    async fn list_documents(&self) -> Result<Vec<Document>, StorageError> {
        let rows = sqlx::query("SELECT id, title FROM documents ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_document).collect()
    }
}
