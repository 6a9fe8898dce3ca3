//! Export options and report types.

use std::path::PathBuf;

use crate::config::{DB_PATH, EXPORT_DELIMITER, EXPORT_PATH, MINERALS_TABLE};

/// Options for exporting a table.
///
/// The defaults reproduce the original fixed-filename behavior: `minspec.db`,
/// table `minerals`, tab-delimited output to `mineral_data.csv` in the
/// working directory.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// SQLite database file to read.
    pub db_path: PathBuf,
    /// Table to export.
    pub table: String,
    /// Output file path (created or truncated).
    pub output: PathBuf,
    /// Field delimiter written between values.
    pub delimiter: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            table: MINERALS_TABLE.to_string(),
            output: PathBuf::from(EXPORT_PATH),
            delimiter: EXPORT_DELIMITER,
        }
    }
}

/// Result of a completed export.
#[derive(Clone, Debug)]
pub struct ExportReport {
    /// Number of data rows written (the header line is not counted).
    pub rows: usize,
    /// Absolute path of the written file.
    pub output_path: PathBuf,
}
