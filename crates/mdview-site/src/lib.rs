//! Document repository and menu rendering for mdview.
//!
//! [`DocRepository`] owns the set of discoverable documents, built
//! once from a storage scan and read-only afterwards. The menu module
//! turns the document list and a parsed heading tree into the two
//! navigation fragments the viewer embeds into the page shell.
//!
//! # Example
//!
//! ```
//! use mdview_site::DocRepository;
//! use mdview_storage::MockStorage;
//!
//! let storage = MockStorage::new()
//!     .with_file("intro.md", "# Intro")
//!     .with_file("setup.md", "# Setup");
//!
//! let repo = DocRepository::scan(&storage).unwrap();
//! assert_eq!(repo.first().id.as_str(), "intro");
//! assert_eq!(repo.resolve_active(Some("setup")).id.as_str(), "setup");
//! assert_eq!(repo.resolve_active(Some("unknown")).id.as_str(), "intro");
//! ```

mod document;
mod menu;
mod repository;

pub use document::{DocId, Document};
pub use menu::{render_document_switcher, render_header_tree};
pub use repository::{DocRepository, RepoError};
