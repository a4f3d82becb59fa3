//! Markdown body conversion.
//!
//! Wraps `pulldown-cmark` to turn the document body into HTML. Heading
//! tags are rewritten to carry `id` attributes assigned by the shared
//! [`Slugger`], so anchors agree with the header side pass in
//! [`crate::headers`].

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use crate::headers::HeaderError;
use crate::slug::Slugger;

/// Convert Markdown body text to HTML.
///
/// GFM tables, strikethrough, and task lists are enabled. Every
/// heading is emitted as `<hN id="...">` with an anchor computed from
/// its visible text.
///
/// # Errors
///
/// Returns [`HeaderError::AnchorOverflow`] if anchor disambiguation
/// exhausts its bound, the same bound the header side pass uses.
pub fn render_markdown(markdown: &str) -> Result<String, HeaderError> {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut slugger = Slugger::new();

    // Buffered heading under construction: level, collected plain
    // text, and the inline events to replay inside the tag.
    let mut heading: Option<(u8, String, Vec<Event>)> = None;
    let mut events: Vec<Event> = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((heading_level_to_num(level), String::new(), Vec::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text, inner)) = heading.take() {
                    let anchor = slugger.assign(&text)?;
                    events.push(Event::Html(
                        format!(r#"<h{level} id="{anchor}">"#).into(),
                    ));
                    events.extend(inner);
                    events.push(Event::Html(format!("</h{level}>\n").into()));
                }
            }
            event => match heading.as_mut() {
                Some((_, text, inner)) => {
                    match &event {
                        Event::Text(t) => text.push_str(t),
                        Event::Code(c) => text.push_str(c),
                        Event::SoftBreak | Event::HardBreak => text.push(' '),
                        _ => {}
                    }
                    inner.push(event);
                }
                None => events.push(event),
            },
        }
    }

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, events.into_iter());
    Ok(output)
}

/// Escape text for safe embedding in HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
