//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::storage::{ScannedFile, Storage, StorageError};

/// Mock storage for testing.
///
/// Stores file contents in memory. Scan order is insertion order, so
/// tests control discovery order directly.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use mdview_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("guide.md", "# Guide\n\nContent.");
///
/// let files = storage.scan().unwrap();
/// assert_eq!(files[0].name, "guide.md");
/// assert!(storage.exists(Path::new("guide.md")));
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: Vec<ScannedFile>,
    contents: HashMap<PathBuf, String>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given name and content.
    ///
    /// The file's path equals its name.
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let path = PathBuf::from(&name);
        self.files.push(ScannedFile {
            name,
            path: path.clone(),
        });
        self.contents.insert(path, content.into());
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<ScannedFile>, StorageError> {
        Ok(self.files.clone())
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        self.contents.get(path).cloned().ok_or_else(|| {
            StorageError::io(
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such mock file"),
                path,
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.contents.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scan_preserves_insertion_order() {
        let storage = MockStorage::new()
            .with_file("zebra.md", "# Z")
            .with_file("alpha.md", "# A");

        let files = storage.scan().unwrap();

        assert_eq!(files[0].name, "zebra.md");
        assert_eq!(files[1].name, "alpha.md");
    }

    #[test]
    fn test_read_returns_content() {
        let storage = MockStorage::new().with_file("guide.md", "# Guide");

        let content = storage.read(Path::new("guide.md")).unwrap();

        assert_eq!(content, "# Guide");
    }

    #[test]
    fn test_read_missing_fails() {
        let storage = MockStorage::new();

        let result = storage.read(Path::new("missing.md"));

        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_exists() {
        let storage = MockStorage::new().with_file("guide.md", "# Guide");

        assert!(storage.exists(Path::new("guide.md")));
        assert!(!storage.exists(Path::new("missing.md")));
    }
}
