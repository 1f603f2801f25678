//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, a [`JsonOutput`] built from the finished
//! [`Report`] is serialized to stdout as a single JSON object, replacing the
//! table.

use std::path::Path;

use serde::Serialize;

use crate::comparator::FileRecord;
use crate::report::Report;
use crate::utils::convert_magnitude;

/// Top-level JSON output.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The "before" directory as given on the command line.
    pub before: String,

    /// The "after" directory as given on the command line.
    pub after: String,

    /// Reported files, in display order.
    pub files: Vec<JsonFileEntry>,

    /// Files of the "before" directory that do not exist in the "after" one.
    pub missing: Vec<String>,

    /// Aggregated totals over `files`.
    pub summary: JsonSummary,
}

/// A single compared file.
#[derive(Serialize, Debug)]
pub struct JsonFileEntry {
    /// File name, converted lossily to UTF-8.
    pub name: String,

    /// Size in the "before" directory, in bytes.
    pub original_size: u64,

    /// Size in the "after" directory, in bytes.
    pub new_size: u64,

    /// Saved bytes (`original_size - new_size`); negative when the file grew.
    pub saved: i128,

    /// Human-readable sizes, as shown in the table.
    pub original_size_formatted: String,
    pub new_size_formatted: String,
    pub saved_formatted: String,
}

/// Totals across all reported files.
#[derive(Serialize, Debug)]
pub struct JsonSummary {
    /// Number of reported files.
    pub total_files: usize,

    /// Sum of original sizes.
    pub total_original: u64,

    /// Sum of new sizes.
    pub total_new: u64,

    /// `total_original - total_new`.
    pub total_saved: i128,

    /// Saved share of `total_original`, in percent (`0.0` when it is zero).
    pub percent_saved: f64,

    pub total_original_formatted: String,
    pub total_new_formatted: String,
    pub total_saved_formatted: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` for the comparison of `before` and `after`.
    #[must_use]
    pub fn from_report(before: &Path, after: &Path, report: &Report) -> Self {
        let totals = &report.totals;

        Self {
            before: before.display().to_string(),
            after: after.display().to_string(),
            files: report
                .records
                .iter()
                .map(JsonFileEntry::from_record)
                .collect(),
            missing: report.missing.clone(),
            summary: JsonSummary {
                total_files: totals.file_count,
                total_original: totals.original,
                total_new: totals.new,
                total_saved: totals.difference,
                percent_saved: totals.percent_saved,
                total_original_formatted: convert_magnitude(i128::from(totals.original)),
                total_new_formatted: convert_magnitude(i128::from(totals.new)),
                total_saved_formatted: convert_magnitude(totals.difference),
            },
        }
    }
}

impl JsonFileEntry {
    /// Convert a `FileRecord` into a `JsonFileEntry`.
    #[must_use]
    pub fn from_record(record: &FileRecord) -> Self {
        let new_size = record.new_size_or_zero();

        Self {
            name: record.name.to_string_lossy().into_owned(),
            original_size: record.original_size,
            new_size,
            saved: record.difference(),
            original_size_formatted: convert_magnitude(i128::from(record.original_size)),
            new_size_formatted: convert_magnitude(i128::from(new_size)),
            saved_formatted: convert_magnitude(record.difference()),
        }
    }
}
