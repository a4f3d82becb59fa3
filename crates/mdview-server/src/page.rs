//! HTML page shell.
//!
//! Assembles the final page from pre-rendered fragments: navbar with
//! the document switcher, sidebar with the heading tree, and the
//! converted document body. Pure string building; the fragments come
//! in already escaped.

use std::fmt::Write;

use mdview_renderer::escape_html;

/// All data needed to render one page.
pub(crate) struct PageData<'a> {
    /// Page title and navbar brand.
    pub(crate) title: &'a str,
    /// Label of the document-switcher menu.
    pub(crate) menu_label: &'a str,
    /// Link the dark stylesheet set.
    pub(crate) dark_mode: bool,
    /// Rendered document-switcher fragment.
    pub(crate) switcher: &'a str,
    /// Rendered heading-tree fragment.
    pub(crate) header_tree: &'a str,
    /// Converted document body HTML.
    pub(crate) content: &'a str,
}

/// Render the complete HTML page.
pub(crate) fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(page.title));
    html.push_str("<link rel=\"stylesheet\" href=\"/assets/styles.css\">\n");
    if page.dark_mode {
        html.push_str("<link rel=\"stylesheet\" href=\"/assets/styles-dark.css\">\n");
    }
    html.push_str("</head>\n<body>\n");

    // Navbar: brand plus the document-switcher dropdown.
    html.push_str("<nav class=\"navbar\">\n");
    let _ = writeln!(
        html,
        "<a class=\"navbar-brand\" href=\"/\">{}</a>",
        escape_html(page.title)
    );
    html.push_str("<div class=\"navbar-menu\">\n");
    let _ = writeln!(
        html,
        "<span class=\"menu-label\">{}</span>",
        escape_html(page.menu_label)
    );
    html.push_str(page.switcher);
    html.push_str("</div>\n</nav>\n");

    // Sidebar with the in-page heading tree, then the document body.
    html.push_str("<div class=\"layout\">\n<aside class=\"sidebar\">\n");
    html.push_str(page.header_tree);
    html.push_str("</aside>\n<main class=\"content\">\n");
    html.push_str(page.content);
    html.push_str("\n</main>\n</div>\n");

    html.push_str("</body>\n</html>\n");
    html
}
