//! Heading extraction and tree synthesis.
//!
//! A single forward pass over the document lines recognizes ATX
//! headings (`#` through `######`), assigns each a unique anchor, and
//! folds the flat heading sequence into a nested [`HeaderNode`] tree
//! driven by heading levels. Everything that is not a heading is left
//! untouched; the body text flows to the HTML converter as-is.

use crate::slug::Slugger;

/// One heading in a document's navigation tree.
///
/// Children always have a level strictly greater than their parent.
/// Level gaps in the source (an H1 followed directly by an H3) do not
/// produce placeholder nodes; the H3 simply becomes a child of the H1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderNode {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Heading text with markers, closing sequence, and inline
    /// link/image markup stripped.
    pub text: String,
    /// Unique in-document anchor for `#anchor` links.
    pub anchor: String,
    /// Nested sub-headings in document order.
    pub children: Vec<HeaderNode>,
}

/// Parse result: the untouched body plus the heading tree.
#[derive(Debug)]
pub struct ParsedDocument<'a> {
    /// The raw Markdown body, passed through unchanged for conversion.
    pub body: &'a str,
    /// Root-level headings with nested children, in document order.
    pub headers: Vec<HeaderNode>,
}

/// Header extraction error.
///
/// Malformed heading syntax never errors; it degrades to body text.
/// The only failure mode is the anchor-suffix bound.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// Anchor disambiguation exhausted its numeric-suffix bound.
    #[error("too many headings share the anchor `{0}`")]
    AnchorOverflow(String),
}

/// Parse one document: extract the heading tree, pass the body through.
///
/// # Errors
///
/// Returns [`HeaderError::AnchorOverflow`] if anchor disambiguation
/// exhausts its bound; no other input fails.
pub fn parse(text: &str) -> Result<ParsedDocument<'_>, HeaderError> {
    Ok(ParsedDocument {
        body: text,
        headers: extract_headers(text.lines())?,
    })
}

/// Extract the heading tree from a sequence of document lines.
///
/// Lines are consumed exactly once, in order. Headings inside fenced
/// code blocks are not recognized, matching the HTML converter.
///
/// # Errors
///
/// Returns [`HeaderError::AnchorOverflow`] if anchor disambiguation
/// exhausts its bound.
pub fn extract_headers<'a, I>(lines: I) -> Result<Vec<HeaderNode>, HeaderError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slugger = Slugger::new();
    let mut builder = TreeBuilder::default();
    let mut fence: Option<Fence> = None;

    for line in lines {
        if let Some(open) = &fence {
            if open.is_closed_by(line) {
                fence = None;
            }
            continue;
        }
        if let Some(opened) = Fence::parse(line) {
            fence = Some(opened);
            continue;
        }

        if let Some((level, text)) = parse_atx_heading(line) {
            let text = visible_text(text);
            let anchor = slugger.assign(&text)?;
            builder.push(HeaderNode {
                level,
                text,
                anchor,
                children: Vec::new(),
            });
        }
    }

    Ok(builder.finish())
}

/// Recognize an ATX heading line.
///
/// Returns the level (1..=6) and the heading text, or `None` when the
/// line is body text: four or more leading spaces, more than six
/// markers, or a marker run not followed by whitespace all disqualify
/// the line. An optional trailing closing run of `#` is stripped.
fn parse_atx_heading(line: &str) -> Option<(u8, &str)> {
    let rest = strip_indent(line)?;

    let level = rest.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let after = &rest[level..];
    if !after.is_empty() && !after.starts_with(' ') && !after.starts_with('\t') {
        return None;
    }

    let mut text = after.trim();

    // Optional closing sequence: a run of '#' preceded by whitespace
    // (or forming the entire text) is not part of the heading.
    let without_closing = text.trim_end_matches('#');
    if without_closing.len() != text.len()
        && (without_closing.is_empty() || without_closing.ends_with([' ', '\t']))
    {
        text = without_closing.trim_end();
    }

    #[allow(clippy::cast_possible_truncation)]
    let level = level as u8;
    Some((level, text))
}

/// Strip up to three leading spaces; four or more means an indented
/// code block, not a heading or fence.
fn strip_indent(line: &str) -> Option<&str> {
    let indent = line.chars().take_while(|&c| c == ' ').count();
    (indent <= 3).then(|| &line[indent..])
}

/// Reduce inline link and image markup to its visible part.
///
/// `[text](url)` and `[text][ref]` keep only `text`; `![alt](url)`
/// keeps only `alt`. This matches the text the HTML converter
/// collects from inline events, so both sides slug the same input.
/// A bracket pair without a destination is left as written.
fn visible_text(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let label_open = match bytes[i] {
            b'[' => i,
            b'!' if bytes.get(i + 1) == Some(&b'[') => i + 1,
            _ => {
                i += 1;
                continue;
            }
        };

        let Some(label_close) = matching_delimiter(bytes, label_open, b'[', b']') else {
            i = label_open + 1;
            continue;
        };
        let Some(dest_close) = destination_end(bytes, label_close + 1) else {
            i = label_close + 1;
            continue;
        };

        out.push_str(&text[plain_start..i]);
        out.push_str(&visible_text(&text[label_open + 1..label_close]));
        i = dest_close + 1;
        plain_start = i;
    }

    out.push_str(&text[plain_start..]);
    out
}

/// Find the closing delimiter matching the opener at `open`, tracking
/// nesting of the same delimiter pair.
fn matching_delimiter(bytes: &[u8], open: usize, opener: u8, closer: u8) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &b) in bytes[open..].iter().enumerate() {
        if b == opener {
            depth += 1;
        } else if b == closer {
            depth -= 1;
            if depth == 0 {
                return Some(open + offset);
            }
        }
    }
    None
}

/// End of a link destination starting at `start`: `(url)` for inline
/// links, `[ref]` for reference links.
fn destination_end(bytes: &[u8], start: usize) -> Option<usize> {
    match bytes.get(start)? {
        b'(' => matching_delimiter(bytes, start, b'(', b')'),
        b'[' => matching_delimiter(bytes, start, b'[', b']'),
        _ => None,
    }
}

/// An open fenced code block (``` or ~~~).
struct Fence {
    marker: char,
    length: usize,
}

impl Fence {
    /// Recognize a fence opening line.
    fn parse(line: &str) -> Option<Self> {
        let rest = strip_indent(line)?;
        let marker = rest.chars().next().filter(|&c| c == '`' || c == '~')?;
        let length = rest.chars().take_while(|&c| c == marker).count();
        (length >= 3).then_some(Self { marker, length })
    }

    /// A closing fence uses the same marker, at least as long, with
    /// nothing but whitespace after it.
    fn is_closed_by(&self, line: &str) -> bool {
        let Some(rest) = strip_indent(line) else {
            return false;
        };
        let length = rest.chars().take_while(|&c| c == self.marker).count();
        length >= self.length && rest[length..].trim().is_empty()
    }
}

/// Stack-based tree assembly.
///
/// The stack holds the open ancestor chain. Pushing a heading of level
/// L first closes every open node with level >= L; each closed node
/// attaches to the node below it on the stack, or to the root list
/// when the stack runs empty. The remaining stack top (if any) becomes
/// the new node's parent regardless of level gaps.
#[derive(Default)]
struct TreeBuilder {
    roots: Vec<HeaderNode>,
    stack: Vec<HeaderNode>,
}

impl TreeBuilder {
    fn push(&mut self, node: HeaderNode) {
        while self.stack.last().is_some_and(|top| top.level >= node.level) {
            self.close_top();
        }
        self.stack.push(node);
    }

    fn close_top(&mut self) {
        let Some(node) = self.stack.pop() else {
            return;
        };
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn finish(mut self) -> Vec<HeaderNode> {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.roots
    }
}
