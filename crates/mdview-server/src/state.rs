//! Application state.
//!
//! Shared state for all request handlers. Everything here is built at
//! startup and read-only afterwards, so it is safe to share across
//! concurrent requests without locking.

use std::sync::Arc;

use mdview_site::DocRepository;
use mdview_storage::Storage;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Document repository, scanned once at startup.
    pub(crate) repo: DocRepository,
    /// Storage backend for reading document text.
    pub(crate) storage: Arc<dyn Storage>,
    /// Page title and navbar brand.
    pub(crate) title: String,
    /// Label of the document-switcher menu.
    pub(crate) menu_label: String,
    /// Serve the dark stylesheet set.
    pub(crate) dark_mode: bool,
}
