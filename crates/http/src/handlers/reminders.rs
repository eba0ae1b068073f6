use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use doc_reminders_core::{ReminderLog, ValidationError};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{CreateReminderBody, ReminderListQuery, UpdateStatusBody};

/// `POST /api/reminders`
///
/// An unreadable body is treated like an empty one.
pub async fn create_reminder(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateReminderBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ReminderLog>), ApiError> {
    let request = match body {
        Ok(Json(body)) => body.validate(),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable create body");
            Err(ValidationError::MissingReminderFields)
        },
    }
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let log = state.reminder_service.create_reminder(request).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// `GET /api/reminders?document_id=&user_id=`
///
/// Never fails on query input: an undecodable query string lists everything.
pub async fn list_reminders(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<ReminderLog>>, ApiError> {
    let query = match pairs {
        Ok(Query(pairs)) => ReminderListQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable list query");
            ReminderListQuery::default()
        },
    };
    let Some(filter) = query.filter() else {
        return Ok(Json(Vec::new()));
    };
    let logs = state.reminder_service.list_reminders(filter).await?;
    Ok(Json(logs))
}

/// `PUT /api/reminders/{id}`
///
/// The reminder lookup happens before the body is judged, so an unknown
/// id is a 404 whatever the body holds.
pub async fn update_reminder_status(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> Result<Json<ReminderLog>, ApiError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("Reminder log with id {raw_id} not found")))?;

    let update = match body {
        Ok(Json(body)) => body.validate(),
        Err(rejection) => {
            tracing::debug!(id, %rejection, "unreadable status body");
            Err(ValidationError::MissingStatus)
        },
    };

    let log = state.reminder_service.update_status(id, update).await?;
    Ok(Json(log))
}
