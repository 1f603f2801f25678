//! Report configuration: row ordering and record selection.
//!
//! This module defines the sorting criteria and the options that decide which
//! compared files make it into the report.

use clap::ValueEnum;

/// Enumeration of supported sorting criteria for report rows.
///
/// Every criterion sorts ascending by default; use
/// [`SortOptions::reverse`] to flip the order. Ties keep file-name order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum SortCriteria {
    /// Sort by size in the "before" directory
    #[default]
    Original,

    /// Sort by size in the "after" directory
    New,

    /// Sort by saved space (original minus new)
    Saved,

    /// Sort by file name
    Name,
}

/// Configuration for report sorting behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// The sorting criterion to apply
    pub criteria: SortCriteria,

    /// Whether to reverse the sort order
    pub reverse: bool,
}

/// Options controlling how compared files become report rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Row ordering
    pub sort: SortOptions,

    /// Keep files that exist in the "after" directory with zero length.
    ///
    /// Files absent from the "after" directory are always left out.
    pub include_empty: bool,
}
