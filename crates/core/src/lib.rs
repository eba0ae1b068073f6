//! Core types for doc-reminders
//!
//! Domain types and boundary validation shared across all other crates.

mod constants;
mod directory;
mod env_config;
mod reminder;
mod request;

pub use constants::*;
pub use directory::{Document, User};
pub use env_config::env_parse_with_default;
pub use reminder::{NewReminderLog, ReminderFilter, ReminderLog};
pub use request::{CreateReminder, StatusUpdate, ValidationError};
