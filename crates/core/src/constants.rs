//! Shared constants for doc-reminders.

/// Status assigned to every freshly created reminder log.
pub const DEFAULT_REMINDER_STATUS: &str = "Sent";

/// Column width of `users.username`.
pub const USERNAME_MAX_LEN: usize = 80;

/// Column width of `documents.title`.
pub const DOCUMENT_TITLE_MAX_LEN: usize = 120;

/// Environment variable holding the database connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Environment variable overriding the connection pool size.
pub const DB_MAX_CONNECTIONS_ENV: &str = "REMINDERS_DB_MAX_CONNECTIONS";

/// SQLite connection pool: default maximum connections.
pub const SQLITE_POOL_MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL connection pool: default maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// Connection pool: acquire timeout in seconds.
pub const POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Connection pool: idle timeout in seconds.
pub const POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default HTTP port, same as the dashboard expects.
pub const DEFAULT_HTTP_PORT: u16 = 5000;
