// Shared test helpers for database setup and test data creation.

use std::path::Path;

use sqlx::SqlitePool;

/// Creates a minerals database at `db_path` with the test schema applied.
/// The returned pool is read-write; close it before pointing the exporter at
/// the file so all data is flushed to the main database file.
pub async fn create_minerals_db(db_path: &Path) -> SqlitePool {
    std::fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .read(true)
        .open(db_path)
        .expect("Failed to create database file");

    let pool = SqlitePool::connect(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("Failed to open test database");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS minerals (
            name TEXT NOT NULL,
            color TEXT,
            sample_id TEXT NOT NULL,
            hardness REAL
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create minerals table");

    pool
}

/// Inserts one mineral row.
#[allow(dead_code)] // Used by other test files
pub async fn insert_mineral(
    pool: &SqlitePool,
    name: &str,
    color: Option<&str>,
    sample_id: &str,
    hardness: Option<f64>,
) {
    sqlx::query("INSERT INTO minerals (name, color, sample_id, hardness) VALUES (?, ?, ?, ?)")
        .bind(name)
        .bind(color)
        .bind(sample_id)
        .bind(hardness)
        .execute(pool)
        .await
        .expect("Failed to insert mineral");
}
