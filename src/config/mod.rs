//! Configuration types for a comparison run.
//!
//! - [`ReportOptions`] / [`SortOptions`] / [`SortCriteria`] decide which
//!   files are reported and in what order
//! - [`OutputOptions`] decides how the report is printed
//! - [`FileConfig`] holds the persistent defaults from `config.toml`

pub mod file;
pub mod output;
pub mod report;

pub use file::FileConfig;
pub use output::OutputOptions;
pub use report::{ReportOptions, SortCriteria, SortOptions};
