//! Markdown header extraction and HTML conversion for mdview.
//!
//! Two passes over the same document text:
//!
//! - [`parse`] is a line-level side pass that recognizes ATX headings
//!   and synthesizes the nested [`HeaderNode`] tree used for in-page
//!   navigation. It never touches the document body.
//! - [`render_markdown`] converts the body to HTML with
//!   `pulldown-cmark`, injecting `id` attributes on headings.
//!
//! Both passes assign anchors with the same [`Slugger`], so a
//! `#anchor` link produced from the header tree resolves to the
//! heading the converter emitted.
//!
//! # Example
//!
//! ```
//! use mdview_renderer::parse;
//!
//! let doc = parse("# Intro\n\n## Setup\n\nBody text.").unwrap();
//! assert_eq!(doc.headers.len(), 1);
//! assert_eq!(doc.headers[0].children[0].anchor, "setup");
//! ```

mod headers;
mod html;
mod slug;

pub use headers::{HeaderError, HeaderNode, ParsedDocument, extract_headers, parse};
pub use html::{escape_html, render_markdown};
pub use slug::{Slugger, slugify};
