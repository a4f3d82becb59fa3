//! Filesystem storage backend.
//!
//! Scans a single source directory for `.md` files. Entries are sorted
//! by filename so discovery order is deterministic regardless of the
//! order the OS returns directory entries in.

use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{ScannedFile, Storage, StorageError};

/// Filesystem storage reading from a single source directory.
#[derive(Debug)]
pub struct FsStorage {
    source_dir: PathBuf,
}

impl FsStorage {
    /// Create a filesystem storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// The configured source directory.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<ScannedFile>, StorageError> {
        if !self.source_dir.is_dir() {
            return Err(StorageError::SourceNotFound(self.source_dir.clone()));
        }

        let entries = fs::read_dir(&self.source_dir)
            .map_err(|e| StorageError::io(e, &self.source_dir))?;

        let mut files: Vec<ScannedFile> = entries
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping unreadable directory entry");
                        return None;
                    }
                };
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().into_owned();

                if name.starts_with('.') || !path.is_file() {
                    return None;
                }
                if !is_markdown(&path) {
                    return None;
                }

                Some(ScannedFile { name, path })
            })
            .collect();

        // Directory read order is OS-dependent; sort for a stable
        // discovery order.
        files.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(
            source_dir = %self.source_dir.display(),
            count = files.len(),
            "Scanned source directory"
        );

        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        fs::read_to_string(path).map_err(|e| StorageError::io(e, path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Check for a `.md` extension, case-insensitively.
fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}
