//! Per-directory size listings.
//!
//! A [`DirectoryIndex`] maps the file name of every regular file directly
//! inside one directory to its size in bytes. Sub-directories, symlinks and
//! other special entries are left out, and nothing is read recursively.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::CompareError;

/// One entry of a directory listing, as reported by the filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// File name of the entry (no directory components), as raw OS bytes
    pub name: OsString,

    /// Whether the entry is a regular file
    pub is_regular_file: bool,

    /// Size in bytes reported by the entry's metadata
    pub size: u64,
}

impl DirEntryInfo {
    /// Create a new entry description.
    #[must_use]
    pub fn new(name: impl Into<OsString>, is_regular_file: bool, size: u64) -> Self {
        Self {
            name: name.into(),
            is_regular_file,
            size,
        }
    }
}

/// Mapping from file name to size for the regular files of one directory.
///
/// Names are kept as [`OsString`] so that distinct non-UTF-8 names never
/// collapse into the same key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryIndex(BTreeMap<OsString, u64>);

impl DirectoryIndex {
    /// Build an index from a pre-enumerated listing.
    ///
    /// Only entries flagged as regular files are kept. The first error in the
    /// listing aborts the build, so an index is either complete or absent.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `entries`.
    pub fn build<I>(entries: I) -> Result<Self, CompareError>
    where
        I: IntoIterator<Item = Result<DirEntryInfo, CompareError>>,
    {
        let mut files = BTreeMap::new();

        for entry in entries {
            let entry = entry?;

            if entry.is_regular_file {
                files.insert(entry.name, entry.size);
            } else {
                trace!("skipping non-regular entry {}", entry.name.to_string_lossy());
            }
        }

        Ok(Self(files))
    }

    /// Index the regular files directly inside `dir`.
    ///
    /// Callers that want [`CompareError::PathNotFound`] and
    /// [`CompareError::NotADirectory`] instead of a generic read failure run
    /// [`validate_directory`] first.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Filesystem`] when the directory or any entry's
    /// metadata cannot be read.
    pub fn from_dir(dir: &Path) -> Result<Self, CompareError> {
        let index = Self::build(read_directory(dir))?;
        debug!(
            "indexed {} regular files in {}",
            index.len(),
            dir.display()
        );

        Ok(index)
    }

    /// Size of the file called `name`, if it is in the index.
    #[must_use]
    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<u64> {
        self.0.get(name.as_ref()).copied()
    }

    /// Number of indexed files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no regular files were indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, size)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, u64)> {
        self.0.iter().map(|(name, size)| (name.as_os_str(), *size))
    }
}

impl<K: Into<OsString>> FromIterator<(K, u64)> for DirectoryIndex {
    fn from_iter<T: IntoIterator<Item = (K, u64)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, size)| (name.into(), size))
                .collect(),
        )
    }
}

impl IntoIterator for DirectoryIndex {
    type Item = (OsString, u64);
    type IntoIter = btree_map::IntoIter<OsString, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Check that `path` exists and is a directory.
///
/// Symlinks are followed, so a link to a directory is accepted.
///
/// # Errors
///
/// - [`CompareError::PathNotFound`] if nothing exists at `path`
/// - [`CompareError::NotADirectory`] if `path` is not a directory
/// - [`CompareError::Filesystem`] for any other metadata failure
pub fn validate_directory(path: &Path) -> Result<(), CompareError> {
    let metadata = fs::metadata(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            CompareError::PathNotFound(path.to_path_buf())
        } else {
            CompareError::filesystem(path, e)
        }
    })?;

    if !metadata.is_dir() {
        return Err(CompareError::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}

/// List the immediate entries of `dir` without following symlinks.
///
/// Entries are yielded in file-name order. Each item carries either the
/// entry's name, type and size, or the error hit while reading it.
pub fn read_directory(dir: &Path) -> impl Iterator<Item = Result<DirEntryInfo, CompareError>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(move |entry| {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                CompareError::filesystem(&path, e)
            })?;

            let metadata = entry
                .metadata()
                .map_err(|e| CompareError::filesystem(entry.path(), e))?;

            Ok(DirEntryInfo {
                name: entry.file_name().to_os_string(),
                is_regular_file: entry.file_type().is_file(),
                size: metadata.len(),
            })
        })
}
