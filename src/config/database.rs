//! Database configuration module.
//!
//! This module handles the database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust models.

use crate::entities::Translation;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::{debug, info};

/// Default database location used when neither config.toml nor `DATABASE_URL` sets one.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/prompt_translator.sqlite?mode=rwc";

/// Connects to the database at `database_url` and makes sure the schema exists.
///
/// For file-backed `SQLite` URLs the parent directory is created first, since
/// `SQLite` creates the file but not its directory.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    ensure_sqlite_directory(database_url)?;
    debug!("Connecting to database at {}", database_url);
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    info!("Database ready");
    Ok(db)
}

/// Creates the translations table if it does not exist yet.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let translation_table = schema
        .create_table_from_entity(Translation)
        .if_not_exists()
        .to_owned();

    db.execute(builder.build(&translation_table)).await?;
    Ok(())
}

/// Returns the file path of a file-backed `SQLite` URL, `None` for anything else.
fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        None
    } else {
        Some(path)
    }
}

fn ensure_sqlite_directory(database_url: &str) -> Result<()> {
    if let Some(parent) = sqlite_file_path(database_url)
        .and_then(|path| Path::new(path).parent())
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
