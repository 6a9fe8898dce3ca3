use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file does not exist or could not be opened.
    #[error("Cannot open database file {path}: {source}")]
    OpenError {
        /// Path the exporter tried to open.
        path: String,
        /// Underlying sqlx error.
        source: sqlx::Error,
    },

    /// The requested table is not present in the database.
    #[error("No such table: {table}")]
    MissingTable {
        /// Name of the table the export was asked for.
        table: String,
    },

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for the duplicate scan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The input file could not be opened or parsed.
    #[error("Failed to read export file: {0}")]
    ReadError(#[from] csv::Error),

    /// A data record had fewer than the three fields the key needs.
    #[error("Record on line {line} has {fields} field(s), need at least 3")]
    ShortRecord {
        /// 1-based line number in the input file (header included).
        line: u64,
        /// Number of fields the record actually had.
        fields: usize,
    },
}
