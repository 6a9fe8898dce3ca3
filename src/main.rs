//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `minspec` library that handles
//! command-line argument parsing, logger initialization, and user-facing
//! output. All core functionality lives in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::error;

use minspec::config::{DB_PATH, EXPORT_PATH, MINERALS_TABLE};
use minspec::initialization::init_logger_with;
use minspec::{find_repeated_records, run_export, ExportOptions, LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "minspec",
    version,
    about = "Export a mineral database table to a delimited file and check it for duplicate records"
)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Export all rows of a table to a delimited text file
    Export(ExportArgs),
    /// Report duplicate (name, sample id) records in an export file
    Duplicates(DuplicatesArgs),
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// SQLite database file to read
    #[arg(long, default_value = DB_PATH)]
    db_path: PathBuf,

    /// Table to export
    #[arg(long, default_value = MINERALS_TABLE)]
    table: String,

    /// Output file (created or truncated)
    #[arg(long, default_value = EXPORT_PATH)]
    output: PathBuf,

    /// Field delimiter (a single character, or \t)
    #[arg(long, default_value = "\\t", value_parser = parse_delimiter)]
    delimiter: u8,
}

#[derive(Debug, Args)]
struct DuplicatesArgs {
    /// Export file to scan
    #[arg(default_value = EXPORT_PATH)]
    file: PathBuf,

    /// Field delimiter (a single character, or \t)
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
}

/// Parses a delimiter flag: one character, or the escape `\t`.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        b"\\t" | b"\t" => Ok(b'\t'),
        [b] => Ok(*b),
        _ => Err(format!(
            "delimiter must be a single character or \\t, got {s:?}"
        )),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match cli.command {
        Command::Export(args) => {
            let options = ExportOptions {
                db_path: args.db_path,
                table: args.table,
                output: args.output,
                delimiter: args.delimiter,
            };

            // Export failures are reported, not propagated: the command logs
            // the error and still exits successfully, keeping the contract of
            // the original tool.
            match run_export(options).await {
                Ok(report) => {
                    println!(
                        "Exported {} row{}",
                        report.rows,
                        if report.rows == 1 { "" } else { "s" }
                    );
                    println!(
                        "Data exported successfully into {}",
                        report.output_path.display()
                    );
                }
                Err(e) => error!("{e:#}"),
            }
            Ok(())
        }
        Command::Duplicates(args) => match find_repeated_records(&args.file, args.delimiter) {
            Ok(duplicates) => {
                for key in &duplicates {
                    println!("{key}");
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("minspec error: {e:#}");
                process::exit(1);
            }
        },
    }
}
