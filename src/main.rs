//! # dir-compare
//!
//! A CLI tool that reports, for two directories, how the size of each
//! same-named regular file changed between them. Typical use is checking the
//! effect of compressing or re-encoding a folder of files.
//!
//! ## Features
//!
//! - Before-anchored comparison of the regular files in two directories
//! - Human-readable binary units (B, KiB, MiB, ... EiB)
//! - Per-file and total saved space, with the saved percentage
//! - Sortable rows and optional JSON output
//! - Persistent configuration via `~/.config/dir-compare/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Compare a folder before and after compression
//! dir-compare ./raw ./compressed
//!
//! # Biggest savings first, as JSON
//! dir-compare ./raw ./compressed --sort saved --reverse --json
//! ```

mod cli;

use std::io::{self, IsTerminal};
use std::process::exit;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, ConfigCommand};
use colored::Colorize;
use dir_compare::{compare_dirs, config::FileConfig, output::JsonOutput, render, table::TableStyle};

/// Entry point for the dir-compare application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function orchestrates the full pipeline: parse arguments, validate and
/// index both directories, join them, build the report and print it.
///
/// # Errors
///
/// Returns usage errors, path errors, filesystem read errors, or JSON
/// serialization errors.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose());

    if let Some(command) = args.config {
        return handle_config_command(command);
    }

    let (before, after) = args.directories()?;
    let file_config = load_config(args.json());
    let report_options = args.report_options(&file_config);
    let output_options = args.output_options(&file_config);

    let records = compare_dirs(&before, &after)?;
    let report = render(records, &report_options);

    if output_options.json {
        let output = JsonOutput::from_report(&before, &after, &report);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let style = if output_options.color && io::stdout().is_terminal() {
            TableStyle::colored()
        } else {
            TableStyle::plain()
        };
        println!("{}", report.to_table(style));
    }

    Ok(())
}

/// Install the global logger.
///
/// `RUST_LOG` wins; otherwise only warnings are shown, or debug output with `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

// ── Config actions ───────────────────────────────────────────────────

/// Default config file template written by `--config init`.
const CONFIG_TEMPLATE: &str = r#"# dir-compare configuration
# All values shown are their defaults. Uncomment and change as needed.

[report]
# Sort rows by: original, new, saved, name (always ascending)
# sort = "original"

# Reverse the sort order
# reverse = false

# Also report files that are empty (zero bytes) in the after directory
# include_empty = false

[output]
# Print a JSON document instead of the table
# json = false

# Colour the table border when writing to a terminal
# color = true
"#;

/// Run a `--config` action.
fn handle_config_command(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let sort = config.report.sort.as_deref().map_or_else(
        || "\"original\"  (default)".to_string(),
        |v| format!("\"{v}\""),
    );

    format!(
        "\
[report]
sort          = {sort}
reverse       = {reverse}
include_empty = {include_empty}

[output]
json          = {json}
color         = {color}",
        reverse = show_bool(config.report.reverse, false),
        include_empty = show_bool(config.report.include_empty, false),
        json = show_bool(config.output.json, false),
        color = show_bool(config.output.color, true),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
