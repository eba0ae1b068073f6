//! Storage backend trait abstraction
//!
//! Async domain traits implemented by every backend and by the
//! enum-dispatching [`StorageBackend`](crate::StorageBackend).

use async_trait::async_trait;
use doc_reminders_core::{Document, NewReminderLog, ReminderFilter, ReminderLog, User};

use crate::error::StorageError;

/// Reviewer rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. Fails with `Duplicate` if the username is taken.
    async fn create_user(&self, username: &str) -> Result<User, StorageError>;

    async fn get_user(&self, id: i64) -> Result<Option<User>, StorageError>;

    /// All users in id order.
    async fn list_users(&self) -> Result<Vec<User>, StorageError>;
}

/// Document rows.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create_document(&self, title: &str) -> Result<Document, StorageError>;

    async fn get_document(&self, id: i64) -> Result<Option<Document>, StorageError>;

    /// All documents in id order.
    async fn list_documents(&self) -> Result<Vec<Document>, StorageError>;
}

/// Reminder log rows.
#[async_trait]
pub trait ReminderLogStore: Send + Sync {
    /// Insert a log and return it with its assigned id.
    ///
    /// Dangling document/user ids fail with `ForeignKey`.
    async fn insert_reminder(&self, log: &NewReminderLog) -> Result<ReminderLog, StorageError>;

    async fn get_reminder(&self, id: i64) -> Result<Option<ReminderLog>, StorageError>;

    /// Logs matching `filter`, in insertion order.
    async fn list_reminders(&self, filter: ReminderFilter)
    -> Result<Vec<ReminderLog>, StorageError>;

    /// Replace the status of a log. Returns `None` if the id is unknown.
    async fn update_reminder_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<ReminderLog>, StorageError>;
}

/// Connection health and lifecycle.
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Round-trip a trivial query.
    async fn ping(&self) -> Result<(), StorageError>;

    /// Close the pool, waiting for checked-out connections.
    async fn close(&self);
}
