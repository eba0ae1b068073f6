mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use doc_reminders_core::{DATABASE_URL_ENV, DEFAULT_HTTP_PORT};
use doc_reminders_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doc-reminders", version)]
#[command(about = "Reminder log API for review documents", long_about = None)]
struct Cli {
    /// Database URL, `sqlite://<path>` or `postgres://...`
    #[arg(long, global = true, env = DATABASE_URL_ENV)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, env = "REMINDERS_PORT", default_value_t = DEFAULT_HTTP_PORT)]
        port: u16,
        #[arg(short = 'H', long, env = "REMINDERS_HOST", default_value = "127.0.0.1")]
        host: String,
    },
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage documents
    Document {
        #[command(subcommand)]
        action: DocumentAction,
    },
    /// Inspect reminder logs
    Reminders {
        #[command(subcommand)]
        action: RemindersAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    Add { username: String },
    List,
}

#[derive(Subcommand)]
enum DocumentAction {
    Add { title: String },
    List,
}

#[derive(Subcommand)]
enum RemindersAction {
    List {
        #[arg(long)]
        document_id: Option<i64>,
        #[arg(long)]
        user_id: Option<i64>,
    },
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("doc-reminders")
        .join("reminders.db")
}

async fn open_storage(database_url: Option<String>) -> Result<Arc<StorageBackend>> {
    let storage = match database_url.filter(|url| !url.trim().is_empty()) {
        Some(url) => StorageBackend::connect(&url).await?,
        None => {
            let db_path = default_db_path();
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            StorageBackend::new_sqlite(&db_path).await?
        },
    };
    tracing::debug!(backend = storage.kind(), "storage opened");
    Ok(Arc::new(storage))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let storage = open_storage(cli.database_url).await?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(storage, &host, port).await?,
        Commands::User { action } => match action {
            UserAction::Add { username } => commands::directory::add_user(storage, &username).await?,
            UserAction::List => commands::directory::list_users(storage).await?,
        },
        Commands::Document { action } => match action {
            DocumentAction::Add { title } => {
                commands::directory::add_document(storage, &title).await?;
            },
            DocumentAction::List => commands::directory::list_documents(storage).await?,
        },
        Commands::Reminders { action } => match action {
            RemindersAction::List { document_id, user_id } => {
                commands::reminders::list(storage, document_id, user_id).await?;
            },
        },
    }

    Ok(())
}
