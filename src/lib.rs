//! # dir-compare
//!
//! Reports how the size of each same-named regular file changed between two
//! directories, e.g. a folder of images before and after re-encoding.
//!
//! The pipeline is:
//!
//! 1. [`index`] builds a name → size [`DirectoryIndex`] for each directory
//! 2. [`comparator`] joins the two indexes, anchored on the "before" side
//! 3. [`report`] sorts, filters and totals the records and formats every size
//!    with [`utils::convert_magnitude`]
//! 4. [`table`] or [`output`] prints the result
//!
//! Only the immediate children of each directory are compared; files that
//! exist only in the "after" directory are never reported.

pub mod comparator;
pub mod config;
pub mod error;
pub mod index;
pub mod output;
pub mod report;
pub mod table;
pub mod utils;

pub use comparator::{FileRecord, compare_dirs, join};
pub use config::{OutputOptions, ReportOptions, SortCriteria, SortOptions};
pub use error::CompareError;
pub use index::DirectoryIndex;
pub use report::{Report, render};
