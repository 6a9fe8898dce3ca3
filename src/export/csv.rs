//! Table export to a delimited text file.
//!
//! Streams `SELECT *` over the table and writes one record per row, so the
//! table never has to fit in memory. Column names come from
//! `pragma_table_info`, which also means an empty table still gets its
//! header line.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use futures::TryStreamExt;
use log::info;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool, TypeInfo, ValueRef};

use crate::error_handling::DatabaseError;
use crate::export::types::{ExportOptions, ExportReport};

/// Exports `options.table` to `options.output`, header line first.
///
/// Rows are written in query order, one record per line, fields separated by
/// `options.delimiter`. The output file is created or truncated.
///
/// # Errors
///
/// Returns `DatabaseError::MissingTable` if the table is unknown, or an error
/// if the query or the output file fails.
pub async fn export_table(pool: &SqlitePool, options: &ExportOptions) -> Result<ExportReport> {
    let columns = table_columns(pool, &options.table).await?;

    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_path(&options.output)
        .with_context(|| {
            format!(
                "Failed to create output file: {}",
                options.output.display()
            )
        })?;

    writer.write_record(&columns)?;

    // The table name cannot be a bind parameter; it was validated against
    // pragma_table_info above, and identifier quoting covers the rest.
    let sql = format!("SELECT * FROM \"{}\"", options.table.replace('"', "\"\""));
    let mut rows = sqlx::query(&sql).fetch(pool);

    let mut row_count = 0usize;
    while let Some(row) = rows.try_next().await? {
        let mut record = Vec::with_capacity(columns.len());
        for idx in 0..columns.len() {
            record.push(field_text(&row, idx)?);
        }
        writer.write_record(&record)?;
        row_count += 1;
    }

    writer.flush()?;

    let output_path = std::fs::canonicalize(&options.output).with_context(|| {
        format!(
            "Failed to resolve output path: {}",
            options.output.display()
        )
    })?;

    info!(
        "Exported {} row(s) from table '{}'",
        row_count, options.table
    );

    Ok(ExportReport {
        rows: row_count,
        output_path,
    })
}

/// Returns the column names of `table` in declaration order.
async fn table_columns(pool: &SqlitePool, table: &str) -> Result<Vec<String>, DatabaseError> {
    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
        .bind(table)
        .fetch_all(pool)
        .await?;

    if columns.is_empty() {
        return Err(DatabaseError::MissingTable {
            table: table.to_string(),
        });
    }
    Ok(columns)
}

/// Renders one dynamically typed column value as text.
///
/// NULL becomes an empty field; INTEGER and REAL use their display form;
/// BLOB is rendered as lossy UTF-8.
fn field_text(row: &SqliteRow, idx: usize) -> Result<String, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(String::new());
    }

    match raw.type_info().name() {
        "INTEGER" => Ok(row.try_get::<i64, _>(idx)?.to_string()),
        "REAL" => Ok(row.try_get::<f64, _>(idx)?.to_string()),
        "BLOB" => Ok(String::from_utf8_lossy(row.try_get::<&[u8], _>(idx)?).into_owned()),
        _ => row.try_get::<String, _>(idx),
    }
}
