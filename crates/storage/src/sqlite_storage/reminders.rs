//! ReminderLogStore implementation for SqliteStorage.

use super::*;

use doc_reminders_core::{NewReminderLog, ReminderFilter};
use sqlx::{QueryBuilder, Sqlite};

use crate::traits::ReminderLogStore;

#[async_trait]
impl ReminderLogStore for SqliteStorage {
    async fn insert_reminder(&self, log: &NewReminderLog) -> Result<ReminderLog, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO reminder_logs (document_id, user_id, sent_timestamp, status)
             VALUES (?, ?, ?, ?)
             RETURNING {REMINDER_COLUMNS}"
        ))
        .bind(log.document_id)
        .bind(log.user_id)
        .bind(log.sent_timestamp)
        .bind(&log.status)
        .fetch_one(&self.pool)
        .await?;
        row_to_reminder(&row)
    }

    async fn get_reminder(&self, id: i64) -> Result<Option<ReminderLog>, StorageError> {
        sqlx::query(&format!("SELECT {REMINDER_COLUMNS} FROM reminder_logs WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .as_ref()
            .map(row_to_reminder)
            .transpose()
    }

    async fn list_reminders(
        &self,
        filter: ReminderFilter,
    ) -> Result<Vec<ReminderLog>, StorageError> {
        let mut query: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new(format!("SELECT {REMINDER_COLUMNS} FROM reminder_logs"));
        query.push(" WHERE 1 = 1");
        if let Some(document_id) = filter.document_id {
            query.push(" AND document_id = ").push_bind(document_id);
        }
        if let Some(user_id) = filter.user_id {
            query.push(" AND user_id = ").push_bind(user_id);
        }
        query.push(" ORDER BY id");

        let rows = query.build().fetch_all(&self.pool).await?;
        rows.iter().map(row_to_reminder).collect()
    }

    async fn update_reminder_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<ReminderLog>, StorageError> {
        sqlx::query(&format!(
            "UPDATE reminder_logs SET status = ? WHERE id = ? RETURNING {REMINDER_COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .as_ref()
        .map(row_to_reminder)
        .transpose()
    }
}
