//! Export functionality.
//!
//! Dumps every row of one database table, header line first, into a
//! delimited text file.

mod csv;
mod types;

use anyhow::Result;

use crate::storage::init_db_pool_with_path;

pub use self::csv::export_table;
pub use types::{ExportOptions, ExportReport};

/// Opens the database, exports the table, and releases the connection pool.
///
/// The pool is closed on both the success and the error path; a failed
/// connect returns before anything needs releasing.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the table does not
/// exist, or the output file cannot be written.
pub async fn run_export(options: ExportOptions) -> Result<ExportReport> {
    let pool = init_db_pool_with_path(&options.db_path).await?;
    let result = export_table(&pool, &options).await;
    pool.close().await;
    result
}
