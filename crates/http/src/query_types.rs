//! Request/query types (Deserialize)

use doc_reminders_core::{CreateReminder, ReminderFilter, StatusUpdate, ValidationError};
use serde::Deserialize;

/// Raw `POST /api/reminders` body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateReminderBody {
    #[serde(default)]
    pub document_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl CreateReminderBody {
    pub fn validate(self) -> Result<CreateReminder, ValidationError> {
        CreateReminder::new(self.document_id, self.user_id)
    }
}

/// Raw `PUT /api/reminders/{id}` body.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusBody {
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateStatusBody {
    pub fn validate(self) -> Result<StatusUpdate, ValidationError> {
        StatusUpdate::new(self.status)
    }
}

/// `GET /api/reminders` query string.
///
/// Built from the raw pairs so a repeated key keeps its first value and a
/// malformed id is ignored rather than rejecting the whole request.
#[derive(Debug, Default)]
pub struct ReminderListQuery {
    pub document_id: Option<String>,
    pub user_id: Option<String>,
}

impl ReminderListQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "document_id" => &mut query.document_id,
                "user_id" => &mut query.user_id,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// `None` when an id is numeric but outside `i64`, so no row can match.
    pub fn filter(&self) -> Option<ReminderFilter> {
        let document_id = parse_id(self.document_id.as_deref())?;
        let user_id = parse_id(self.user_id.as_deref())?;
        Some(ReminderFilter::new(document_id, user_id))
    }
}

/// Outer `None`: the id can never match. Inner `None`: no filter on this field.
fn parse_id(raw: Option<&str>) -> Option<Option<i64>> {
    let Some(value) = raw.map(str::trim) else {
        return Some(None);
    };
    match value.parse::<i64>() {
        Ok(id) => Some(Some(id)),
        Err(_) if is_integer_literal(value) => None,
        Err(_) => Some(None),
    }
}

fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
