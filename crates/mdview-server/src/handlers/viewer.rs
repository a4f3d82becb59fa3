//! Viewer page endpoint.
//!
//! Resolves the active document from the `doc` query parameter,
//! renders its body and heading tree, and returns the assembled page
//! shell.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use mdview_site::{render_document_switcher, render_header_tree};
use serde::Deserialize;

use crate::error::ServerError;
use crate::page::{PageData, render_page};
use crate::state::AppState;

/// Query parameters for GET /.
#[derive(Debug, Deserialize)]
pub(crate) struct ViewerParams {
    /// Requested document id. Missing or unknown ids fall back to the
    /// first document.
    doc: Option<String>,
}

/// Handle GET /.
pub(crate) async fn view_document(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewerParams>,
) -> Result<Html<String>, ServerError> {
    let active = state.repo.resolve_active(params.doc.as_deref());
    tracing::debug!(doc = %active.id, "Rendering document");

    let text = state.storage.read(&active.path)?;
    let parsed = mdview_renderer::parse(&text)?;
    let content = mdview_renderer::render_markdown(parsed.body)?;

    let html = render_page(&PageData {
        title: &state.title,
        menu_label: &state.menu_label,
        dark_mode: state.dark_mode,
        switcher: &render_document_switcher(state.repo.documents()),
        header_tree: &render_header_tree(&parsed.headers),
        content: &content,
    });

    Ok(Html(html))
}
