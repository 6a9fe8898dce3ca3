//! Application configuration and constants.
//!
//! This module provides:
//! - Default paths, table name, and delimiter constants
//! - Shared CLI-facing types (log level/format)

mod constants;
mod types;

pub use constants::*;
pub use types::{LogFormat, LogLevel};
