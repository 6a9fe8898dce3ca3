//! Configuration constants.
//!
//! Defaults reproduce the original fixed-filename behavior of the tool: a
//! `minspec.db` database in the working directory, a `minerals` table, and a
//! `mineral_data.csv` export file.

/// Default SQLite database file.
pub const DB_PATH: &str = "minspec.db";

/// Default table exported by `minspec export`.
pub const MINERALS_TABLE: &str = "minerals";

/// Default export file, written to (and read from) the working directory.
pub const EXPORT_PATH: &str = "mineral_data.csv";

/// Field delimiter the exporter writes.
pub const EXPORT_DELIMITER: u8 = b'\t';

/// Field delimiter the duplicate scan expects.
///
/// Deliberately not the same constant as [`EXPORT_DELIMITER`]: the original
/// tool pair wrote tabs and read commas, and both commands expose a
/// `--delimiter` flag for callers who want one delimiter end to end.
pub const SCAN_DELIMITER: u8 = b',';
