//! Error kinds for a comparison run.
//!
//! Every error is fatal: the run stops and no partial report is produced.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a directory comparison.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Missing or invalid command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// A directory argument does not exist.
    #[error("the directory {} does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// A directory argument exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Reading a directory or an entry's metadata failed.
    #[error("failed to read {}: {source}", path.display())]
    Filesystem {
        /// Path that could not be read
        path: PathBuf,

        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl CompareError {
    /// Wrap an I/O failure that happened while reading `path`.
    #[must_use]
    pub fn filesystem(path: &Path, source: impl Into<io::Error>) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_errors_name_the_path() {
        let missing = CompareError::PathNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(missing.to_string(), "the directory /no/such/dir does not exist");

        let file = CompareError::NotADirectory(PathBuf::from("notes.txt"));
        assert_eq!(file.to_string(), "notes.txt is not a directory");
    }

    #[test]
    fn test_filesystem_error_includes_source() {
        let err = CompareError::filesystem(
            Path::new("/tmp/before"),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );

        let message = err.to_string();
        assert!(message.starts_with("failed to read /tmp/before"));
        assert!(message.contains("permission denied"));
    }
}
