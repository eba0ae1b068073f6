//! SQLite storage backend using sqlx.
//!
//! Split into modular files by table.

mod documents;
mod reminders;
mod users;

use std::path::Path;
use std::str::FromStr as _;
use std::time::Duration;

use async_trait::async_trait;
use doc_reminders_core::{
    DB_MAX_CONNECTIONS_ENV, Document, POOL_ACQUIRE_TIMEOUT_SECS, POOL_IDLE_TIMEOUT_SECS,
    ReminderLog, SQLITE_POOL_MAX_CONNECTIONS, User, env_parse_with_default,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::error::StorageError;
use crate::migrations::run_sqlite_migrations;
use crate::traits::HealthStore;

/// Columns selected for every reminder log read, in `row_to_reminder` order.
pub(crate) const REMINDER_COLUMNS: &str = "id, document_id, user_id, sent_timestamp, status";

const BUSY_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Connect using a `sqlite:` URL, e.g. `sqlite://reminders.db` or `sqlite::memory:`.
    ///
    /// The database file is created if missing and the schema is bootstrapped.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?;
        Self::connect(options, is_in_memory(database_url)).await
    }

    /// Open (or create) a database file at `db_path`.
    pub async fn open(db_path: &Path) -> Result<Self, StorageError> {
        Self::connect(SqliteConnectOptions::new().filename(db_path), false).await
    }

    async fn connect(options: SqliteConnectOptions, in_memory: bool) -> Result<Self, StorageError> {
        let options = options
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));

        // Every in-memory connection is its own database, so keep exactly one alive.
        let (max_connections, idle_timeout) = if in_memory {
            (1, None)
        } else {
            (
                env_parse_with_default(DB_MAX_CONNECTIONS_ENV, SQLITE_POOL_MAX_CONNECTIONS),
                Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)),
            )
        };

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(idle_timeout);
        if in_memory {
            pool_options = pool_options.min_connections(1).max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        run_sqlite_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!(in_memory, max_connections, "SqliteStorage initialized");
        Ok(Self { pool })
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

pub(crate) fn row_to_user(row: &SqliteRow) -> Result<User, StorageError> {
    Ok(User { id: row.try_get("id")?, username: row.try_get("username")? })
}

pub(crate) fn row_to_document(row: &SqliteRow) -> Result<Document, StorageError> {
    Ok(Document { id: row.try_get("id")?, title: row.try_get("title")? })
}

pub(crate) fn row_to_reminder(row: &SqliteRow) -> Result<ReminderLog, StorageError> {
    Ok(ReminderLog {
        id: row.try_get("id")?,
        document_id: row.try_get("document_id")?,
        user_id: row.try_get("user_id")?,
        sent_timestamp: row.try_get("sent_timestamp")?,
        status: row.try_get("status")?,
    })
}

#[async_trait]
impl HealthStore for SqliteStorage {
    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
