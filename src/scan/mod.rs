//! Duplicate detection over an exported delimited file.
//!
//! A single linear pass: skip the header line, key each record on its first
//! and third fields, and collect every key seen before. Only the second and
//! later occurrences of a key are reported; the first occurrence of an
//! eventual duplicate is not.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::error_handling::ScanError;

/// Composite (name, sample id) key of a duplicated record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateKey {
    /// First field of the record.
    pub name: String,
    /// Third field of the record.
    pub sample_id: String,
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.name, self.sample_id)
    }
}

/// Scans `path` for records sharing a (name, sample id) key.
///
/// Exactly the first line is skipped as the header, regardless of its
/// content. Keys are matched exactly: no trimming, no case folding. A key
/// occurring k times is reported k-1 times, in encounter order.
///
/// # Errors
///
/// Returns `ScanError::ReadError` if the file cannot be opened or parsed,
/// and `ScanError::ShortRecord` for a data record with fewer than three
/// fields.
pub fn find_repeated_records(path: &Path, delimiter: u8) -> Result<Vec<DuplicateKey>, ScanError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut repeats = Vec::new();

    for result in reader.records() {
        let record = result?;
        let (Some(name), Some(sample_id)) = (record.get(0), record.get(2)) else {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(ScanError::ShortRecord {
                line,
                fields: record.len(),
            });
        };

        let key = (name.to_string(), sample_id.to_string());
        if seen.contains(&key) {
            repeats.push(DuplicateKey {
                name: key.0,
                sample_id: key.1,
            });
        } else {
            seen.insert(key);
        }
    }

    debug!(
        "Scanned {} distinct key(s), found {} repeat(s)",
        seen.len(),
        repeats.len()
    );

    Ok(repeats)
}
