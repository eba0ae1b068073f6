//! Reminder log records and read filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REMINDER_STATUS;
use crate::request::CreateReminder;

/// One reminder event tying a document to a reviewer.
///
/// `status` is a free-form label; nothing restricts it to a known set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderLog {
    pub id: i64,
    pub document_id: i64,
    pub user_id: i64,
    /// Serialized as ISO-8601, or `null` for rows written without one.
    pub sent_timestamp: Option<DateTime<Utc>>,
    pub status: String,
}

/// Row to insert; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReminderLog {
    pub document_id: i64,
    pub user_id: i64,
    pub sent_timestamp: DateTime<Utc>,
    pub status: String,
}

impl NewReminderLog {
    /// A log stamped with the current UTC time and the default status.
    #[must_use]
    pub fn sent_now(request: CreateReminder) -> Self {
        Self {
            document_id: request.document_id,
            user_id: request.user_id,
            sent_timestamp: Utc::now(),
            status: DEFAULT_REMINDER_STATUS.to_owned(),
        }
    }
}

/// Optional equality filters for listing logs. Set fields are AND-ed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderFilter {
    pub document_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl ReminderFilter {
    /// Builds a filter, treating an id of `0` as "no filter".
    #[must_use]
    pub fn new(document_id: Option<i64>, user_id: Option<i64>) -> Self {
        Self {
            document_id: document_id.filter(|id| *id != 0),
            user_id: user_id.filter(|id| *id != 0),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.document_id.is_none() && self.user_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log(document_id: i64, user_id: i64) -> ReminderLog {
        ReminderLog {
            id: 1,
            document_id,
            user_id,
            sent_timestamp: Some(Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()),
            status: "Sent".to_owned(),
        }
    }

    #[test]
    fn zero_ids_do_not_filter() {
        let filter = ReminderFilter::new(Some(0), Some(0));
        assert!(filter.is_empty());
        assert_eq!(filter, ReminderFilter::default());
    }

    #[test]
    fn keeps_nonzero_ids() {
        let filter = ReminderFilter::new(Some(1), Some(0));
        assert!(!filter.is_empty());
        assert_eq!(filter.document_id, Some(1));
        assert_eq!(filter.user_id, None);
    }

    #[test]
    fn sent_now_uses_default_status() {
        let request = CreateReminder::new(Some(7), Some(8)).unwrap();
        let before = Utc::now();
        let new_log = NewReminderLog::sent_now(request);
        assert_eq!(new_log.status, "Sent");
        assert_eq!((new_log.document_id, new_log.user_id), (7, 8));
        assert!(new_log.sent_timestamp >= before);
    }

    #[test]
    fn serializes_timestamp_as_iso8601() {
        let json = serde_json::to_value(log(1, 1)).unwrap();
        assert_eq!(json["sent_timestamp"], "2024-06-15T09:30:00Z");
        assert_eq!(json["status"], "Sent");

        let mut missing = log(1, 1);
        missing.sent_timestamp = None;
        let json = serde_json::to_value(missing).unwrap();
        assert!(json["sent_timestamp"].is_null());
    }
}
