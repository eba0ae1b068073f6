//! UserStore implementation for SqliteStorage.

use super::*;

use crate::traits::UserStore;

#[async_trait]
impl UserStore for SqliteStorage {
    async fn create_user(&self, username: &str) -> Result<User, StorageError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO users (username) VALUES (?) RETURNING id")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(User { id, username: username.to_owned() })
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StorageError> {
        sqlx::query("SELECT id, username FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .as_ref()
            .map(row_to_user)
            .transpose()
    }

    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let rows = sqlx::query("SELECT id, username FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_user).collect()
    }
}
