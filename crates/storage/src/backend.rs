//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use doc_reminders_core::{Document, NewReminderLog, ReminderFilter, ReminderLog, User};

use crate::error::StorageError;
use crate::traits::{DocumentStore, HealthStore, ReminderLogStore, UserStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::SqliteStorage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::SqliteStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::PgStorage),
}

/// Whether `url` names a PostgreSQL server rather than a SQLite database.
pub fn is_postgres_url(url: &str) -> bool {
    url.starts_with("postgres://") || url.starts_with("postgresql://")
}

impl StorageBackend {
    /// Connect to whichever backend the URL scheme names.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        if is_postgres_url(database_url) {
            return Self::connect_postgres(database_url).await;
        }
        if !database_url.starts_with("sqlite:") {
            return Err(StorageError::Config(format!(
                "unsupported database URL scheme: {}",
                redact_url(database_url)
            )));
        }
        Self::connect_sqlite(database_url).await
    }

    #[cfg(feature = "sqlite")]
    pub async fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::SqliteStorage::open(db_path).await?))
    }

    #[cfg(feature = "sqlite")]
    async fn connect_sqlite(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::SqliteStorage::new(database_url).await?))
    }

    #[cfg(not(feature = "sqlite"))]
    async fn connect_sqlite(_database_url: &str) -> Result<Self, StorageError> {
        Err(StorageError::Config("built without the `sqlite` feature".to_owned()))
    }

    #[cfg(feature = "postgres")]
    async fn connect_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect_postgres(_database_url: &str) -> Result<Self, StorageError> {
        Err(StorageError::Config("built without the `postgres` feature".to_owned()))
    }

    /// Short backend name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

/// Strip credentials from a URL before it reaches a log line or error.
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        },
        _ => url.to_owned(),
    }
}

// ── UserStore ────────────────────────────────────────────────────

#[async_trait]
impl UserStore for StorageBackend {
    async fn create_user(&self, username: &str) -> Result<User, StorageError> {
        dispatch!(self, UserStore, create_user(username))
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StorageError> {
        dispatch!(self, UserStore, get_user(id))
    }

    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        dispatch!(self, UserStore, list_users())
    }
}

// ── DocumentStore ────────────────────────────────────────────────

#[async_trait]
impl DocumentStore for StorageBackend {
    async fn create_document(&self, title: &str) -> Result<Document, StorageError> {
        dispatch!(self, DocumentStore, create_document(title))
    }

    async fn get_document(&self, id: i64) -> Result<Option<Document>, StorageError> {
        dispatch!(self, DocumentStore, get_document(id))
    }

    async fn list_documents(&self) -> Result<Vec<Document>, StorageError> {
        dispatch!(self, DocumentStore, list_documents())
    }
}

// ── ReminderLogStore ─────────────────────────────────────────────

#[async_trait]
impl ReminderLogStore for StorageBackend {
    async fn insert_reminder(&self, log: &NewReminderLog) -> Result<ReminderLog, StorageError> {
        dispatch!(self, ReminderLogStore, insert_reminder(log))
    }

    async fn get_reminder(&self, id: i64) -> Result<Option<ReminderLog>, StorageError> {
        dispatch!(self, ReminderLogStore, get_reminder(id))
    }

    async fn list_reminders(
        &self,
        filter: ReminderFilter,
    ) -> Result<Vec<ReminderLog>, StorageError> {
        dispatch!(self, ReminderLogStore, list_reminders(filter))
    }

    async fn update_reminder_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<ReminderLog>, StorageError> {
        dispatch!(self, ReminderLogStore, update_reminder_status(id, status))
    }
}

// ── HealthStore ──────────────────────────────────────────────────

#[async_trait]
impl HealthStore for StorageBackend {
    async fn ping(&self) -> Result<(), StorageError> {
        dispatch!(self, HealthStore, ping())
    }

    async fn close(&self) {
        dispatch!(self, HealthStore, close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_postgres_schemes() {
        assert!(is_postgres_url("postgres://app@localhost/reminders"));
        assert!(is_postgres_url("postgresql://localhost/reminders"));
        assert!(!is_postgres_url("sqlite://reminders.db"));
    }

    #[test]
    fn redacts_credentials() {
        assert_eq!(redact_url("mysql://app:hunter2@db:3306/x"), "mysql://***@db:3306/x");
        assert_eq!(redact_url("file.db"), "file.db");
    }

    #[tokio::test]
    async fn rejects_unknown_scheme() {
        let err = StorageBackend::connect("mysql://app:hunter2@db/x").await.unwrap_err();
        assert!(matches!(err, StorageError::Config(ref msg) if !msg.contains("hunter2")));
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn connects_in_memory_sqlite() {
        let backend = StorageBackend::connect("sqlite::memory:").await.unwrap();
        assert_eq!(backend.kind(), "sqlite");
        backend.ping().await.unwrap();
        assert!(backend.list_users().await.unwrap().is_empty());
        backend.close().await;
    }
}
