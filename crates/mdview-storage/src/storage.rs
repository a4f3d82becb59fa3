//! Storage trait and error types.
//!
//! Provides the [`Storage`] trait for abstracting document discovery and
//! retrieval, along with [`StorageError`] for unified error handling
//! across backends.

use std::path::{Path, PathBuf};

/// One Markdown file found by a storage scan.
///
/// Contains only the file's location and name; content is read lazily
/// via [`Storage::read`] when a document is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannedFile {
    /// File name including extension (e.g., `getting-started.md`).
    pub name: String,
    /// Full path usable with [`Storage::read`].
    pub path: PathBuf,
}

/// Storage error type.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The configured source location does not exist or is not a directory.
    #[error("source directory not found: {0}")]
    SourceNotFound(PathBuf),

    /// An underlying I/O operation failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path the operation was performed on.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl StorageError {
    /// Wrap an I/O error with path context.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Storage abstraction for document discovery and retrieval.
///
/// Implementations are read-only: a scan reflects the state of the
/// source location at call time, and nothing here watches for changes.
/// Consumers that want fresh results scan again.
pub trait Storage: Send + Sync {
    /// Scan the source location and return all Markdown files.
    ///
    /// The returned order is the backend's discovery order and must be
    /// stable across calls for an unchanged source location.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the source location is missing or
    /// cannot be listed.
    fn scan(&self) -> Result<Vec<ScannedFile>, StorageError>;

    /// Read the full raw text of one file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file does not exist or cannot
    /// be read.
    fn read(&self, path: &Path) -> Result<String, StorageError>;

    /// Check whether a file exists.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, path: &Path) -> bool;
}
