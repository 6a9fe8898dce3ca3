//! minspec library: export a SQLite table to a delimited file and scan the
//! result for duplicate records.
//!
//! The library has two entry points mirroring the two CLI subcommands:
//!
//! - [`run_export`] dumps every row of one table (header line first) to a
//!   delimited text file and reports the absolute output path.
//! - [`find_repeated_records`] reads such a file, skips its header line, and
//!   collects every repeat occurrence of the composite (name, sample id) key.
//!
//! # Example
//!
//! ```no_run
//! use minspec::{run_export, ExportOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_export(ExportOptions::default()).await?;
//! println!("{} rows written to {}", report.rows, report.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! The export path requires a Tokio runtime; the scan is synchronous.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod scan;
mod storage;

pub use config::{LogFormat, LogLevel};
pub use error_handling::{DatabaseError, InitializationError, ScanError};
pub use export::{export_table, run_export, ExportOptions, ExportReport};
pub use scan::{find_repeated_records, DuplicateKey};
