//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/dir-compare/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [report]
//! sort = "saved"
//! reverse = true
//! include_empty = false
//!
//! [output]
//! json = false
//! color = true
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Report options
    #[serde(default)]
    pub report: FileReportConfig,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Report options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileReportConfig {
    /// Sort criterion for report rows (`"original"`, `"new"`, `"saved"`, `"name"`)
    pub sort: Option<String>,

    /// Whether to reverse the sort order
    pub reverse: Option<bool>,

    /// Whether to keep files that are empty in the "after" directory
    pub include_empty: Option<bool>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Whether to print JSON instead of the table
    pub json: Option<bool>,

    /// Whether to colour the table border
    pub color: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/dir-compare/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dir-compare").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML for this structure.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.report.sort.is_none());
        assert!(config.report.reverse.is_none());
        assert!(config.report.include_empty.is_none());
        assert!(config.output.json.is_none());
        assert!(config.output.color.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[report]
sort = "saved"
reverse = true
include_empty = true

[output]
json = true
color = false
"#;

        let config = FileConfig::parse(toml_content).unwrap();

        assert_eq!(config.report.sort, Some("saved".to_string()));
        assert_eq!(config.report.reverse, Some(true));
        assert_eq!(config.report.include_empty, Some(true));
        assert_eq!(config.output.json, Some(true));
        assert_eq!(config.output.color, Some(false));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[report]
sort = "name"
"#;

        let config = FileConfig::parse(toml_content).unwrap();

        assert_eq!(config.report.sort, Some("name".to_string()));
        assert!(config.report.reverse.is_none());
        assert!(config.output.json.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = FileConfig::parse("").unwrap();

        assert!(config.report.sort.is_none());
        assert!(config.output.color.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[output]
color = "sometimes"
"#;
        assert!(FileConfig::parse(toml_content).is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let toml_content = r"
[report]
recursive = true
";
        assert!(FileConfig::parse(toml_content).is_err());
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with("dir-compare/config.toml"));
        }
    }
}
