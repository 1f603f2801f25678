//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library, and resolves them against the
//! configuration file.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use dir_compare::CompareError;
use dir_compare::config::{FileConfig, OutputOptions, ReportOptions, SortCriteria, SortOptions};

/// Command-line arguments controlling which files are reported and in what order.
#[derive(Parser)]
struct ReportArgs {
    /// Sort rows by the given criterion (ascending)
    ///
    /// Supported values: original (size before, the default), new (size
    /// after), saved (space saved), name (file name).
    /// Use --reverse to flip the order.
    #[arg(long, value_enum)]
    sort: Option<SortCriteria>,

    /// Reverse the sort order
    #[arg(long)]
    reverse: bool,

    /// Also report files that are empty in the after directory
    ///
    /// By default a zero-length file in the after directory is left out of
    /// the table and the totals, just like a file that is missing there.
    #[arg(long)]
    include_empty: bool,
}

/// Command-line arguments controlling how the report is printed.
#[derive(Parser)]
struct OutputArgs {
    /// Output results as a single JSON object for scripting/piping
    #[arg(long)]
    json: bool,

    /// Do not colour the table border
    #[arg(long)]
    no_color: bool,

    /// Log debug information to stderr
    ///
    /// Shows the directories read, how many regular files each holds and which
    /// files were left out of the report. `RUST_LOG` takes precedence.
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Actions on the configuration file, selected with `--config`.
///
/// Any two paths, including a directory named `config`, remain valid
/// positionals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "dir-compare")]
#[command(
    about = "Compare the sizes of same-named files in two directories and report the space saved"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Inspect or initialise the configuration file instead of comparing
    #[arg(long, value_enum, value_name = "ACTION")]
    pub config: Option<ConfigCommand>,

    /// The directory before the transformation, followed by the directory after it
    ///
    /// Only regular files directly inside the before directory are compared.
    /// Files that exist only in the after directory are ignored.
    #[arg(num_args = 0..=2, value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Report options
    #[command(flatten)]
    report: ReportArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

impl Cli {
    /// Whether `--json` was passed on the command line.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.output.json
    }

    /// Whether `--verbose` was passed on the command line.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.output.verbose
    }

    /// The before and after directories.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Usage`] when fewer than two directories were given.
    pub fn directories(&self) -> Result<(PathBuf, PathBuf), CompareError> {
        match self.dirs.as_slice() {
            [before, after, ..] => Ok((before.clone(), after.clone())),
            _ => Err(CompareError::Usage(
                "not enough arguments supplied: expected <BEFORE> <AFTER>".to_string(),
            )),
        }
    }

    /// Extract report options from CLI args and config file.
    ///
    /// - **sort**: CLI > config > `original`
    /// - **reverse** / **include-empty**: CLI flag `||` config value `||` `false`
    #[must_use]
    pub fn report_options(&self, config: &FileConfig) -> ReportOptions {
        ReportOptions {
            sort: SortOptions {
                criteria: self
                    .report
                    .sort
                    .or_else(|| {
                        config
                            .report
                            .sort
                            .as_ref()
                            .and_then(|s| SortCriteria::from_str(s, true).ok())
                    })
                    .unwrap_or_default(),
                reverse: self.report.reverse || config.report.reverse.unwrap_or(false),
            },
            include_empty: self.report.include_empty
                || config.report.include_empty.unwrap_or(false),
        }
    }

    /// Extract output options from CLI args and config file.
    ///
    /// `--no-color` always wins over the config file's `color` value.
    #[must_use]
    pub fn output_options(&self, config: &FileConfig) -> OutputOptions {
        OutputOptions {
            json: self.output.json || config.output.json.unwrap_or(false),
            color: !self.output.no_color && config.output.color.unwrap_or(true),
        }
    }
}
