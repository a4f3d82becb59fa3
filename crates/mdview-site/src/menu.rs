//! Menu fragment rendering.
//!
//! Two pure functions producing markup strings: the flat document
//! switcher and the nested per-document heading tree. Both produce
//! byte-identical output for the same input and are recomputed on
//! every render.

use std::fmt::Write;

use mdview_renderer::{HeaderNode, escape_html};

use crate::document::Document;

/// Render the flat document-switcher menu.
///
/// One entry per document, in the given order, linking by id through
/// the `doc` query parameter. Selection highlighting is left to the
/// caller's markup.
#[must_use]
pub fn render_document_switcher(docs: &[Document]) -> String {
    let mut html = String::new();
    html.push_str("<ul class=\"doc-switcher\">\n");
    for doc in docs {
        let _ = writeln!(
            html,
            "<li><a class=\"doc-link\" href=\"?doc={}\">{}</a></li>",
            escape_html(doc.id.as_str()),
            escape_html(&doc.title)
        );
    }
    html.push_str("</ul>\n");
    html
}

/// Render a heading tree as a nested navigation list.
///
/// Emits one `<ul class="nav-level-N">` per depth. A node without
/// children emits no nested sub-list. An empty tree renders as an
/// empty string. Recursion depth is bounded by the 1..=6 heading
/// level cap.
#[must_use]
pub fn render_header_tree(nodes: &[HeaderNode]) -> String {
    let mut html = String::new();
    render_level(&mut html, nodes, 0);
    html
}

fn render_level(html: &mut String, nodes: &[HeaderNode], depth: usize) {
    if nodes.is_empty() {
        return;
    }

    let _ = writeln!(html, "<ul class=\"nav-level-{depth}\">");
    for node in nodes {
        let _ = write!(
            html,
            "<li><a href=\"#{}\">{}</a>",
            node.anchor,
            escape_html(&node.text)
        );
        if !node.children.is_empty() {
            html.push('\n');
            render_level(html, &node.children, depth + 1);
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}
