use std::sync::Arc;

use doc_reminders_core::{
    CreateReminder, NewReminderLog, ReminderFilter, ReminderLog, StatusUpdate, ValidationError,
};
use doc_reminders_storage::StorageBackend;
use doc_reminders_storage::traits::{DocumentStore, ReminderLogStore, UserStore};

use crate::ServiceError;

const REMINDER_ENTITY: &str = "Reminder log";

/// Reminder-log lifecycle: create, list and status updates.
///
/// Holds no state between calls; every successful write is committed
/// before returning.
pub struct ReminderService {
    storage: Arc<StorageBackend>,
}

impl ReminderService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Log a reminder stamped now with status `Sent`.
    ///
    /// The document is checked before the user, so a request naming two
    /// missing rows reports the document.
    pub async fn create_reminder(&self, request: CreateReminder) -> Result<ReminderLog, ServiceError> {
        if self.storage.get_document(request.document_id).await?.is_none() {
            return Err(ServiceError::NotFound { entity: "Document", id: request.document_id });
        }
        if self.storage.get_user(request.user_id).await?.is_none() {
            return Err(ServiceError::NotFound { entity: "User", id: request.user_id });
        }

        let log = self.storage.insert_reminder(&NewReminderLog::sent_now(request)).await?;
        tracing::info!(
            id = log.id,
            document_id = log.document_id,
            user_id = log.user_id,
            "reminder logged"
        );
        Ok(log)
    }

    pub async fn list_reminders(
        &self,
        filter: ReminderFilter,
    ) -> Result<Vec<ReminderLog>, ServiceError> {
        let logs = self.storage.list_reminders(filter).await?;
        tracing::debug!(filtered = !filter.is_empty(), count = logs.len(), "reminders listed");
        Ok(logs)
    }

    pub async fn get_reminder(&self, id: i64) -> Result<ReminderLog, ServiceError> {
        self.storage
            .get_reminder(id)
            .await?
            .ok_or(ServiceError::NotFound { entity: REMINDER_ENTITY, id })
    }

    /// Replace the status of reminder `id`.
    ///
    /// `update` is the outcome of body validation. It is only inspected
    /// after the reminder is known to exist, so an unknown id yields
    /// `NotFound` even when the body is malformed.
    pub async fn update_status(
        &self,
        id: i64,
        update: Result<StatusUpdate, ValidationError>,
    ) -> Result<ReminderLog, ServiceError> {
        let current = self.get_reminder(id).await?;
        let update = update?;

        let log = self
            .storage
            .update_reminder_status(id, &update.status)
            .await?
            .ok_or(ServiceError::NotFound { entity: REMINDER_ENTITY, id })?;
        tracing::info!(id, from = %current.status, to = %log.status, "reminder status updated");
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use std::collections::BTreeSet;

    use super::*;
    use crate::test_support::seeded_backend;

    fn create(document_id: i64, user_id: i64) -> CreateReminder {
        CreateReminder::new(Some(document_id), Some(user_id)).unwrap()
    }

    fn status(value: &str) -> Result<StatusUpdate, ValidationError> {
        StatusUpdate::new(Some(value.to_owned()))
    }

    #[tokio::test]
    async fn create_defaults_to_sent_now() {
        let (storage, _dir) = seeded_backend().await;
        let service = ReminderService::new(storage);

        let log = service.create_reminder(create(1, 1)).await.unwrap();
        assert_eq!(log.status, "Sent");
        assert_eq!((log.document_id, log.user_id), (1, 1));
        assert!(log.sent_timestamp.is_some());
    }

    #[tokio::test]
    async fn create_checks_document_before_user() {
        let (storage, _dir) = seeded_backend().await;
        let service = ReminderService::new(storage);

        let err = service.create_reminder(create(999, 998)).await.unwrap_err();
        assert_eq!(err.to_string(), "Document with id 999 not found");

        let err = service.create_reminder(create(1, 999)).await.unwrap_err();
        assert_eq!(err.to_string(), "User with id 999 not found");

        assert!(service.list_reminders(ReminderFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_creates_get_distinct_ids() {
        let (storage, _dir) = seeded_backend().await;
        let service = ReminderService::new(storage);

        let mut ids = Vec::new();
        for (doc, user) in [(1, 1), (1, 1), (2, 1), (2, 2)] {
            ids.push(service.create_reminder(create(doc, user)).await.unwrap().id);
        }
        let unique: BTreeSet<i64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());

        let all = service.list_reminders(ReminderFilter::default()).await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn list_filters_by_document() {
        let (storage, _dir) = seeded_backend().await;
        let service = ReminderService::new(storage);
        service.create_reminder(create(1, 1)).await.unwrap();
        service.create_reminder(create(2, 1)).await.unwrap();

        let logs = service.list_reminders(ReminderFilter::new(Some(1), None)).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].document_id, 1);
    }

    #[tokio::test]
    async fn update_status_is_persisted() {
        let (storage, _dir) = seeded_backend().await;
        let service = ReminderService::new(storage);
        let log = service.create_reminder(create(1, 1)).await.unwrap();

        let updated = service.update_status(log.id, status("Opened")).await.unwrap();
        assert_eq!(updated.status, "Opened");
        assert_eq!(service.get_reminder(log.id).await.unwrap().status, "Opened");
    }

    #[tokio::test]
    async fn unknown_id_wins_over_missing_status() {
        let (storage, _dir) = seeded_backend().await;
        let service = ReminderService::new(storage);

        let err = service.update_status(999, Err(ValidationError::MissingStatus)).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Reminder log with id 999 not found");
    }

    #[tokio::test]
    async fn missing_status_on_existing_log_is_invalid() {
        let (storage, _dir) = seeded_backend().await;
        let service = ReminderService::new(storage);
        let log = service.create_reminder(create(1, 1)).await.unwrap();

        let err = service.update_status(log.id, StatusUpdate::new(None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(ref msg) if msg == "Missing status in request body"));
        assert_eq!(service.get_reminder(log.id).await.unwrap().status, "Sent");
    }
}
