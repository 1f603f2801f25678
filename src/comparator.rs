//! Before/after join of two directory indexes.
//!
//! The join is anchored on the "before" directory: every regular file found
//! there yields one [`FileRecord`], and files that only exist in the "after"
//! directory are dropped.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::Path;

use log::debug;

use crate::error::CompareError;
use crate::index::{DirectoryIndex, validate_directory};

/// Size comparison for one file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// File name as raw OS bytes, unique within a run
    pub name: OsString,

    /// Size in the "before" directory
    pub original_size: u64,

    /// Size in the "after" directory, or `None` when the file is absent there
    pub new_size: Option<u64>,
}

impl FileRecord {
    /// Create a record for a file that has not been matched yet.
    #[must_use]
    pub fn new(name: impl Into<OsString>, original_size: u64) -> Self {
        Self {
            name: name.into(),
            original_size,
            new_size: None,
        }
    }

    /// Create a record with a known "after" size.
    #[must_use]
    pub fn matched(name: impl Into<OsString>, original_size: u64, new_size: u64) -> Self {
        Self {
            name: name.into(),
            original_size,
            new_size: Some(new_size),
        }
    }

    /// Whether the file exists in the "after" directory.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.new_size.is_some()
    }

    /// The "after" size, counting an absent file as zero bytes.
    #[must_use]
    pub fn new_size_or_zero(&self) -> u64 {
        self.new_size.unwrap_or(0)
    }

    /// Bytes saved: `original_size - new_size`.
    ///
    /// Positive when the file shrank, negative when it grew.
    #[must_use]
    pub fn difference(&self) -> i128 {
        i128::from(self.original_size) - i128::from(self.new_size_or_zero())
    }
}

/// Join `before` and `after` into one record per file of `before`.
///
/// Records come out in the iteration order of `before` (file-name order).
/// Each name that also appears in `after` gets its `new_size` filled in;
/// names that appear only in `after` never produce a record.
#[must_use]
pub fn join(before: &DirectoryIndex, after: &DirectoryIndex) -> Vec<FileRecord> {
    let mut records: Vec<FileRecord> = before
        .iter()
        .map(|(name, size)| FileRecord::new(name, size))
        .collect();

    let positions: HashMap<OsString, usize> = records
        .iter()
        .enumerate()
        .map(|(i, record)| (record.name.clone(), i))
        .collect();

    let mut dropped = 0usize;
    for (name, size) in after.iter() {
        match positions.get(name) {
            Some(&i) => records[i].new_size = Some(size),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("ignored {dropped} files that only exist in the after directory");
    }

    records
}

/// Compare the regular files of `before` against those of `after`.
///
/// Both paths are validated before either directory is read, then each
/// directory is indexed and the two indexes are joined with [`join`].
///
/// # Errors
///
/// Returns the first [`CompareError`] hit while validating or reading either
/// directory; no partial result is produced.
pub fn compare_dirs(before: &Path, after: &Path) -> Result<Vec<FileRecord>, CompareError> {
    validate_directory(before)?;
    validate_directory(after)?;

    let before_index = DirectoryIndex::from_dir(before)?;
    let after_index = DirectoryIndex::from_dir(after)?;

    Ok(join(&before_index, &after_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(files: &[(&str, u64)]) -> DirectoryIndex {
        files
            .iter()
            .map(|(name, size)| ((*name).to_string(), *size))
            .collect()
    }

    #[test]
    fn test_join_matches_by_name() {
        let before = index(&[("a.png", 1000), ("b.png", 2000)]);
        let after = index(&[("a.png", 500), ("b.png", 1000)]);

        let records = join(&before, &after);

        assert_eq!(
            records,
            vec![
                FileRecord::matched("a.png", 1000, 500),
                FileRecord::matched("b.png", 2000, 1000),
            ]
        );
        assert_eq!(records[0].difference(), 500);
        assert_eq!(records[1].difference(), 1000);
    }

    #[test]
    fn test_join_is_before_anchored() {
        let before = index(&[("kept.txt", 10)]);
        let after = index(&[("kept.txt", 5), ("only-after.txt", 99)]);

        let records = join(&before, &after);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "kept.txt");
        assert!(records.iter().all(|r| r.name != "only-after.txt"));
    }

    #[test]
    fn test_join_missing_after_file_is_not_found() {
        let before = index(&[("gone.txt", 300)]);
        let after = DirectoryIndex::default();

        let records = join(&before, &after);

        assert_eq!(records, vec![FileRecord::new("gone.txt", 300)]);
        assert!(!records[0].is_found());
        assert_eq!(records[0].new_size_or_zero(), 0);
        assert_eq!(records[0].difference(), 300);
    }

    #[test]
    fn test_join_distinguishes_empty_from_missing() {
        let before = index(&[("empty.txt", 40), ("missing.txt", 40)]);
        let after = index(&[("empty.txt", 0)]);

        let records = join(&before, &after);

        assert_eq!(records[0].new_size, Some(0));
        assert!(records[0].is_found());
        assert_eq!(records[1].new_size, None);
        assert!(!records[1].is_found());
    }

    #[test]
    fn test_difference_negative_when_file_grew() {
        let record = FileRecord::matched("grown.bin", 100, 2_097_252);
        assert_eq!(record.difference(), -2_097_152);
    }

    #[test]
    fn test_difference_does_not_overflow() {
        let record = FileRecord::matched("huge", 0, u64::MAX);
        assert_eq!(record.difference(), -i128::from(u64::MAX));
    }

    #[test]
    fn test_compare_dirs_reads_both_directories() {
        let before = tempfile::TempDir::new().unwrap();
        let after = tempfile::TempDir::new().unwrap();
        std::fs::write(before.path().join("photo.jpg"), vec![0u8; 2048]).unwrap();
        std::fs::write(after.path().join("photo.jpg"), vec![0u8; 512]).unwrap();
        std::fs::write(after.path().join("extra.jpg"), vec![0u8; 10]).unwrap();

        let records = compare_dirs(before.path(), after.path()).unwrap();

        assert_eq!(records, vec![FileRecord::matched("photo.jpg", 2048, 512)]);
    }

    #[test]
    fn test_compare_dirs_validates_after_before_reading() {
        let before = tempfile::TempDir::new().unwrap();
        let missing = before.path().join("missing");

        let result = compare_dirs(before.path(), &missing);
        assert!(matches!(result, Err(CompareError::PathNotFound(p)) if p == missing));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_compare_dirs_pairs_non_utf8_names_exactly() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let before = tempfile::TempDir::new().unwrap();
        let after = tempfile::TempDir::new().unwrap();
        let first = OsStr::from_bytes(b"a\xff");
        let second = OsStr::from_bytes(b"a\xfe");
        std::fs::write(before.path().join(first), vec![0u8; 1000]).unwrap();
        std::fs::write(before.path().join(second), vec![0u8; 2000]).unwrap();
        std::fs::write(after.path().join(first), vec![0u8; 500]).unwrap();
        std::fs::write(after.path().join(second), vec![0u8; 1000]).unwrap();

        let records = compare_dirs(before.path(), after.path()).unwrap();

        assert_eq!(records.len(), 2);
        let sizes_of = |name: &OsStr| {
            records
                .iter()
                .find(|r| r.name.as_os_str() == name)
                .map(|r| (r.original_size, r.new_size))
        };
        assert_eq!(sizes_of(first), Some((1000, Some(500))));
        assert_eq!(sizes_of(second), Some((2000, Some(1000))));
    }

    #[test]
    fn test_join_empty_indexes() {
        let records = join(&DirectoryIndex::default(), &DirectoryIndex::default());
        assert!(records.is_empty());
    }
}
