//! Schema bootstrap for both backends.
//!
//! Idempotent `CREATE ... IF NOT EXISTS` statements run on every startup.
//! There is no versioned migration history.

#[cfg(feature = "postgres")]
use sqlx::PgPool;
#[cfg(feature = "sqlite")]
use sqlx::SqlitePool;

#[cfg(feature = "sqlite")]
const SQLITE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username VARCHAR(80) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS documents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(120) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reminder_logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER NOT NULL REFERENCES documents (id),
        user_id INTEGER NOT NULL REFERENCES users (id),
        sent_timestamp TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
        status TEXT NOT NULL DEFAULT 'Sent'
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_reminder_logs_document ON reminder_logs (document_id)",
    "CREATE INDEX IF NOT EXISTS idx_reminder_logs_user ON reminder_logs (user_id)",
];

#[cfg(feature = "postgres")]
const PG_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        username VARCHAR(80) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS documents (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(120) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reminder_logs (
        id BIGSERIAL PRIMARY KEY,
        document_id BIGINT NOT NULL REFERENCES documents (id),
        user_id BIGINT NOT NULL REFERENCES users (id),
        sent_timestamp TIMESTAMPTZ DEFAULT NOW(),
        status TEXT NOT NULL DEFAULT 'Sent'
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_reminder_logs_document ON reminder_logs (document_id)",
    "CREATE INDEX IF NOT EXISTS idx_reminder_logs_user ON reminder_logs (user_id)",
];

/// Create the SQLite tables and indexes if they are missing.
#[cfg(feature = "sqlite")]
pub(crate) async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SQLITE_SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!(statements = SQLITE_SCHEMA.len(), "sqlite schema ensured");
    Ok(())
}

/// Create the PostgreSQL tables and indexes if they are missing.
#[cfg(feature = "postgres")]
pub(crate) async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in PG_SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!(statements = PG_SCHEMA.len(), "postgres schema ensured");
    Ok(())
}
