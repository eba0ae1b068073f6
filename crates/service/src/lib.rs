//! Service layer for doc-reminders
//!
//! Centralizes business logic between HTTP/CLI handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod directory_service;
mod error;
mod reminder_service;
#[cfg(test)]
mod test_support;

pub use directory_service::DirectoryService;
pub use error::ServiceError;
pub use reminder_service::ReminderService;
