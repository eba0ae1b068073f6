//! Typed error enum for the service layer.

use doc_reminders_core::ValidationError;
use doc_reminders_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying validation, lookup and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, duplicate, constraint, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input. The payload is the client-facing message.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referenced row does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
