//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by table.

mod documents;
mod reminders;
mod users;

use std::time::Duration;

use async_trait::async_trait;
use doc_reminders_core::{
    DB_MAX_CONNECTIONS_ENV, Document, PG_POOL_MAX_CONNECTIONS, POOL_ACQUIRE_TIMEOUT_SECS,
    POOL_IDLE_TIMEOUT_SECS, ReminderLog, User, env_parse_with_default,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::migrations::run_pg_migrations;
use crate::traits::HealthStore;

pub(crate) const REMINDER_COLUMNS: &str = "id, document_id, user_id, sent_timestamp, status";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let max_connections = env_parse_with_default(DB_MAX_CONNECTIONS_ENV, PG_POOL_MAX_CONNECTIONS);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!(max_connections, "PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn row_to_user(row: &PgRow) -> Result<User, StorageError> {
    Ok(User { id: row.try_get("id")?, username: row.try_get("username")? })
}

pub(crate) fn row_to_document(row: &PgRow) -> Result<Document, StorageError> {
    Ok(Document { id: row.try_get("id")?, title: row.try_get("title")? })
}

pub(crate) fn row_to_reminder(row: &PgRow) -> Result<ReminderLog, StorageError> {
    Ok(ReminderLog {
        id: row.try_get("id")?,
        document_id: row.try_get("document_id")?,
        user_id: row.try_get("user_id")?,
        sent_timestamp: row.try_get("sent_timestamp")?,
        status: row.try_get("status")?,
    })
}

#[async_trait]
impl HealthStore for PgStorage {
    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
