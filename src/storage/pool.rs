//! Database connection pool management.
//!
//! The exporter only ever reads, so the pool opens the database file
//! read-only and never creates it: pointing the tool at a missing database is
//! an error, not a fresh empty file in the working directory.

use std::path::Path;

use log::{debug, error};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Opens a read-only connection pool over an existing SQLite database file.
///
/// # Errors
///
/// Returns `DatabaseError::OpenError` if the file does not exist or cannot be
/// opened as a SQLite database.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(false)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to open database {}: {e}", db_path.display());
            DatabaseError::OpenError {
                path: db_path.display().to_string(),
                source: e,
            }
        })?;

    debug!("Opened database {}", db_path.display());
    Ok(pool)
}
