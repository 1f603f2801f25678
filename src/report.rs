//! Report building: ordering, selection, totals and display strings.
//!
//! [`render`] turns the records produced by the comparator into the rows of
//! the final table plus an aggregate `Total` row. Only *surviving* records,
//! those whose file exists in the "after" directory with a non-zero size,
//! contribute rows and totals.

use log::debug;

use crate::comparator::FileRecord;
use crate::config::{ReportOptions, SortCriteria, SortOptions};
use crate::table::{self, TableStyle};
use crate::utils::convert_magnitude;

/// Column headers of the report table.
pub const HEADERS: [&str; 4] = ["File", "Orig. Size", "New Size", "Saved Space"];

/// Label of the aggregate row.
pub const TOTAL_LABEL: &str = "Total";

/// One formatted table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    /// File name, or [`TOTAL_LABEL`]
    pub name: String,

    /// Formatted "before" size
    pub original: String,

    /// Formatted "after" size
    pub new: String,

    /// Formatted saved space
    pub saved: String,
}

impl ReportRow {
    fn from_record(record: &FileRecord) -> Self {
        Self {
            name: record.name.to_string_lossy().into_owned(),
            original: convert_magnitude(i128::from(record.original_size)),
            new: convert_magnitude(i128::from(record.new_size_or_zero())),
            saved: convert_magnitude(record.difference()),
        }
    }

    /// The row's cells in column order.
    #[must_use]
    pub fn cells(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.original.as_str(),
            self.new.as_str(),
            self.saved.as_str(),
        ]
    }
}

/// Aggregate sizes over the surviving records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Totals {
    /// Number of surviving records
    pub file_count: usize,

    /// Sum of original sizes
    pub original: u64,

    /// Sum of new sizes
    pub new: u64,

    /// `original - new`
    pub difference: i128,

    /// Share of the original total that was saved, in percent
    pub percent_saved: f64,
}

impl Totals {
    fn from_records(records: &[FileRecord]) -> Self {
        let (original, new) = records.iter().fold((0u64, 0u64), |(o, n), record| {
            (
                o.saturating_add(record.original_size),
                n.saturating_add(record.new_size_or_zero()),
            )
        });

        Self {
            file_count: records.len(),
            original,
            new,
            difference: i128::from(original) - i128::from(new),
            percent_saved: percent_saved(original, new),
        }
    }
}

/// The finished report for one comparison run.
#[derive(Clone, Debug)]
pub struct Report {
    /// Surviving records, in display order
    pub records: Vec<FileRecord>,

    /// Names present in the "before" directory but absent from the "after" one,
    /// converted lossily for display
    pub missing: Vec<String>,

    /// One formatted row per surviving record
    pub rows: Vec<ReportRow>,

    /// Aggregates over the surviving records
    pub totals: Totals,
}

impl Report {
    /// The formatted `Total` row.
    ///
    /// The saved-space cell carries the percentage, e.g. `"1.5 KiB (50.0 %)"`.
    #[must_use]
    pub fn total_row(&self) -> ReportRow {
        ReportRow {
            name: TOTAL_LABEL.to_string(),
            original: convert_magnitude(i128::from(self.totals.original)),
            new: convert_magnitude(i128::from(self.totals.new)),
            saved: format!(
                "{} ({:.1} %)",
                convert_magnitude(self.totals.difference),
                display_percent(self.totals.percent_saved)
            ),
        }
    }

    /// Render the rows followed by the `Total` row as a bordered table.
    #[must_use]
    pub fn to_table(&self, style: TableStyle) -> String {
        let total = self.total_row();
        let rows: Vec<Vec<&str>> = self
            .rows
            .iter()
            .chain(std::iter::once(&total))
            .map(ReportRow::cells)
            .collect();

        table::render(&HEADERS, &rows, style)
    }
}

/// Order, select, aggregate and format `records`.
///
/// 1. Records are sorted according to `options.sort` (stable).
/// 2. Records absent from the "after" directory are dropped, and so are
///    zero-length "after" files unless `options.include_empty` is set.
/// 3. Each surviving record becomes a [`ReportRow`] and feeds the [`Totals`].
#[must_use]
pub fn render(mut records: Vec<FileRecord>, options: &ReportOptions) -> Report {
    sort_records(&mut records, &options.sort);

    let missing: Vec<String> = records
        .iter()
        .filter(|record| !record.is_found())
        .map(|record| record.name.to_string_lossy().into_owned())
        .collect();

    let total_count = records.len();
    records.retain(|record| is_surviving(record, options.include_empty));
    debug!(
        "reporting {} of {total_count} files ({} missing from the after directory)",
        records.len(),
        missing.len()
    );

    let rows = records.iter().map(ReportRow::from_record).collect();
    let totals = Totals::from_records(&records);

    Report {
        records,
        missing,
        rows,
        totals,
    }
}

/// Sort records in place according to the given sorting options.
///
/// Every criterion sorts ascending; ties keep their current relative order.
/// Setting `sort_opts.reverse` to `true` flips the resulting order.
pub fn sort_records(records: &mut [FileRecord], sort_opts: &SortOptions) {
    match sort_opts.criteria {
        SortCriteria::Original => records.sort_by_key(|r| r.original_size),
        SortCriteria::New => records.sort_by_key(FileRecord::new_size_or_zero),
        SortCriteria::Saved => records.sort_by_key(FileRecord::difference),
        SortCriteria::Name => records.sort_by(|a, b| a.name.cmp(&b.name)),
    }

    if sort_opts.reverse {
        records.reverse();
    }
}

/// Share of `original` saved by shrinking it to `new`, in percent.
///
/// Returns `0.0` when `original` is zero, since there is nothing to compare
/// against.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent_saved(original: u64, new: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }

    let saved = i128::from(original) - i128::from(new);
    saved as f64 / original as f64 * 100.0
}

/// `percent` with values that print as zero at one decimal mapped to `0.0`.
const fn display_percent(percent: f64) -> f64 {
    if percent.abs() < 0.05 {
        0.0
    } else {
        percent
    }
}

/// Whether a record contributes a row and counts towards the totals.
const fn is_surviving(record: &FileRecord, include_empty: bool) -> bool {
    match record.new_size {
        None => false,
        Some(0) => include_empty,
        Some(_) => true,
    }
}
