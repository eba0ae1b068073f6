//! Storage layer for doc-reminders
//!
//! Relational persistence for users, documents and reminder logs via sqlx.
//! SQLite is the default backend; PostgreSQL is available behind the
//! `postgres` feature. Both are reached through [`StorageBackend`].

mod backend;
pub mod error;
mod migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(feature = "sqlite")]
mod sqlite_storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;

pub use backend::{StorageBackend, is_postgres_url};
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
#[cfg(feature = "sqlite")]
pub use sqlite_storage::SqliteStorage;
