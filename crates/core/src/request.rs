//! Validated request values.
//!
//! HTTP and CLI inputs are checked here before they reach the service,
//! so the service only ever sees well-formed requests.

use thiserror::Error;

/// Rejected request body. `Display` is the message returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing document_id or user_id")]
    MissingReminderFields,

    #[error("Missing status in request body")]
    MissingStatus,
}

/// Request to log a new reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateReminder {
    pub document_id: i64,
    pub user_id: i64,
}

impl CreateReminder {
    /// Both ids must be present; an id of `0` counts as absent.
    pub fn new(document_id: Option<i64>, user_id: Option<i64>) -> Result<Self, ValidationError> {
        match (document_id.filter(|id| *id != 0), user_id.filter(|id| *id != 0)) {
            (Some(document_id), Some(user_id)) => Ok(Self { document_id, user_id }),
            _ => Err(ValidationError::MissingReminderFields),
        }
    }
}

/// Request to replace a reminder's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: String,
}

impl StatusUpdate {
    /// The status must be a non-empty string.
    pub fn new(status: Option<String>) -> Result<Self, ValidationError> {
        match status {
            Some(status) if !status.is_empty() => Ok(Self { status }),
            _ => Err(ValidationError::MissingStatus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_both_ids() {
        assert_eq!(
            CreateReminder::new(Some(1), None),
            Err(ValidationError::MissingReminderFields)
        );
        assert_eq!(
            CreateReminder::new(None, Some(1)),
            Err(ValidationError::MissingReminderFields)
        );
        assert_eq!(
            CreateReminder::new(Some(1), Some(2)),
            Ok(CreateReminder { document_id: 1, user_id: 2 })
        );
    }

    #[test]
    fn zero_id_counts_as_missing() {
        assert_eq!(
            CreateReminder::new(Some(0), Some(1)),
            Err(ValidationError::MissingReminderFields)
        );
    }

    #[test]
    fn empty_status_is_missing() {
        assert_eq!(StatusUpdate::new(Some(String::new())), Err(ValidationError::MissingStatus));
        assert_eq!(StatusUpdate::new(None), Err(ValidationError::MissingStatus));
        assert_eq!(
            StatusUpdate::new(Some("Opened".to_owned())).map(|u| u.status),
            Ok("Opened".to_owned())
        );
    }

    #[test]
    fn messages_match_api_contract() {
        assert_eq!(
            ValidationError::MissingReminderFields.to_string(),
            "Missing document_id or user_id"
        );
        assert_eq!(ValidationError::MissingStatus.to_string(), "Missing status in request body");
    }
}
