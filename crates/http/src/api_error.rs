//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a JSON body and status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use doc_reminders_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static
/// message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400: invalid input from caller.
    BadRequest(String),
    /// 404: requested resource doesn't exist.
    NotFound(String),
    /// 409: unique constraint collision.
    Conflict(String),
    /// 503: database temporarily unreachable. Details logged, not exposed.
    Unavailable(anyhow::Error),
    /// 500: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Unavailable(err) => {
                tracing::warn!(error = ?err, "database unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "database unavailable".to_owned())
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            ServiceError::Storage(_) if err.is_duplicate() => Self::Conflict(err.to_string()),
            ServiceError::Storage(_) if err.is_transient() => Self::Unavailable(err.into()),
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_reminders_storage::StorageError;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::InvalidInput("bad".to_owned()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound { entity: "User", id: 3 }, StatusCode::NOT_FOUND),
            (
                ServiceError::Storage(StorageError::Duplicate("username".to_owned())),
                StatusCode::CONFLICT,
            ),
            (
                ServiceError::Storage(StorageError::ForeignKey("document_id".to_owned())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::Storage(StorageError::Database(sqlx::Error::PoolTimedOut)),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }
}
