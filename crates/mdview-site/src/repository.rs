//! Document repository.
//!
//! Built once from a storage scan at startup; read-only afterwards.
//! Document order equals discovery order and drives the switcher menu.
//! A reload means recreating the repository; nothing here watches the
//! source location.

use std::collections::HashSet;

use mdview_storage::Storage;

use crate::document::{DocId, Document, title_from_stem};

/// Repository error type.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The source location holds zero documents. Fatal at
    /// construction: a viewer with nothing to show is a configuration
    /// error, not a runtime one.
    #[error("no documents found to display")]
    Empty,

    /// Direct lookup of an unknown document id.
    #[error("no document with id `{0}`")]
    NotFound(String),

    /// Two files map to the same document id.
    #[error("duplicate document id `{0}`")]
    DuplicateId(String),

    /// The storage scan failed.
    #[error(transparent)]
    Storage(#[from] mdview_storage::StorageError),
}

/// Ordered, immutable set of discoverable documents.
///
/// Successful construction guarantees at least one document and
/// unique ids, so [`first`](Self::first) is infallible. The repository
/// is safe to share read-only across concurrent renders.
#[derive(Debug)]
pub struct DocRepository {
    documents: Vec<Document>,
}

impl DocRepository {
    /// Build the repository by scanning the storage backend once.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::Empty`] when the scan finds no documents,
    /// [`RepoError::DuplicateId`] when two files share a stem, and
    /// propagates storage failures.
    pub fn scan(storage: &dyn Storage) -> Result<Self, RepoError> {
        let files = storage.scan()?;

        let mut seen = HashSet::new();
        let mut documents = Vec::with_capacity(files.len());
        for file in files {
            let id = DocId::from_file_name(&file.name);
            if !seen.insert(id.as_str().to_owned()) {
                return Err(RepoError::DuplicateId(id.as_str().to_owned()));
            }
            let title = title_from_stem(id.as_str());
            documents.push(Document {
                id,
                title,
                path: file.path,
            });
        }

        if documents.is_empty() {
            return Err(RepoError::Empty);
        }

        tracing::debug!(count = documents.len(), "Built document repository");

        Ok(Self { documents })
    }

    /// All documents in discovery order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Check whether a document with this id exists.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        self.documents.iter().any(|doc| doc.id.as_str() == id)
    }

    /// Look up a document by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotFound`] when no document has this id.
    pub fn get(&self, id: &str) -> Result<&Document, RepoError> {
        self.documents
            .iter()
            .find(|doc| doc.id.as_str() == id)
            .ok_or_else(|| RepoError::NotFound(id.to_owned()))
    }

    /// The first document in discovery order, used as the default.
    ///
    /// Infallible because construction rejects empty repositories.
    #[must_use]
    pub fn first(&self) -> &Document {
        &self.documents[0]
    }

    /// Resolve the active document from an optional request parameter.
    ///
    /// An id that exists selects that document; a missing or unknown
    /// id silently falls back to the first document. The requested id
    /// arrives as an explicit argument from the boundary layer; the
    /// repository reads no ambient request state.
    #[must_use]
    pub fn resolve_active(&self, requested: Option<&str>) -> &Document {
        requested
            .and_then(|id| self.documents.iter().find(|doc| doc.id.as_str() == id))
            .unwrap_or_else(|| self.first())
    }
}

#[cfg(test)]
mod tests {
    use mdview_storage::{FsStorage, MockStorage};
    use pretty_assertions::assert_eq;

    use super::*;

    fn three_docs() -> MockStorage {
        MockStorage::new()
            .with_file("intro.md", "# Intro")
            .with_file("setup.md", "# Setup")
            .with_file("faq.md", "# FAQ")
    }

    #[test]
    fn test_scan_preserves_discovery_order() {
        let repo = DocRepository::scan(&three_docs()).unwrap();

        let ids: Vec<&str> = repo.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "setup", "faq"]);
    }

    #[test]
    fn test_first_equals_head_of_document_list() {
        let repo = DocRepository::scan(&three_docs()).unwrap();

        assert_eq!(repo.first(), &repo.documents()[0]);
    }

    #[test]
    fn test_scan_empty_storage_fails() {
        let result = DocRepository::scan(&MockStorage::new());

        assert!(matches!(result, Err(RepoError::Empty)));
    }

    #[test]
    fn test_scan_duplicate_stem_fails() {
        let storage = MockStorage::new()
            .with_file("guide.md", "# One")
            .with_file("guide.MD", "# Two");

        let result = DocRepository::scan(&storage);

        assert!(matches!(result, Err(RepoError::DuplicateId(id)) if id == "guide"));
    }

    #[test]
    fn test_scan_propagates_storage_error() {
        let storage = FsStorage::new("/nonexistent/docs");

        let result = DocRepository::scan(&storage);

        assert!(matches!(result, Err(RepoError::Storage(_))));
    }

    #[test]
    fn test_exists() {
        let repo = DocRepository::scan(&three_docs()).unwrap();

        assert!(repo.exists("setup"));
        assert!(!repo.exists("unknown"));
        assert!(!repo.exists("setup.md"));
    }

    #[test]
    fn test_get_known_id() {
        let repo = DocRepository::scan(&three_docs()).unwrap();

        let doc = repo.get("faq").unwrap();
        assert_eq!(doc.title, "Faq");
        assert_eq!(doc.path, std::path::Path::new("faq.md"));
    }

    #[test]
    fn test_get_unknown_id_fails() {
        let repo = DocRepository::scan(&three_docs()).unwrap();

        assert!(matches!(
            repo.get("unknown"),
            Err(RepoError::NotFound(id)) if id == "unknown"
        ));
    }

    #[test]
    fn test_resolve_active_known_id() {
        let repo = DocRepository::scan(&three_docs()).unwrap();

        assert_eq!(repo.resolve_active(Some("setup")).id.as_str(), "setup");
    }

    #[test]
    fn test_resolve_active_unknown_id_falls_back_to_first() {
        let repo = DocRepository::scan(&three_docs()).unwrap();

        assert_eq!(repo.resolve_active(Some("unknown")).id.as_str(), "intro");
    }

    #[test]
    fn test_resolve_active_no_parameter_falls_back_to_first() {
        let repo = DocRepository::scan(&three_docs()).unwrap();

        assert_eq!(repo.resolve_active(None).id.as_str(), "intro");
    }

    #[test]
    fn test_scan_from_filesystem() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("b-guide.md"), "# Guide").unwrap();
        std::fs::write(temp.path().join("a-intro.md"), "# Intro").unwrap();

        let storage = FsStorage::new(temp.path());
        let repo = DocRepository::scan(&storage).unwrap();

        let ids: Vec<&str> = repo.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a-intro", "b-guide"]);
        assert_eq!(repo.documents()[0].title, "A Intro");
    }
}
