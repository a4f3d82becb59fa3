//! Anchor slug generation.
//!
//! [`slugify`] turns heading text into a URL-fragment-safe identifier;
//! [`Slugger`] makes slugs unique within one document by appending a
//! numeric suffix on collision.

use std::collections::HashSet;

use crate::headers::HeaderError;

/// Fallback slug for headings with no alphanumeric characters.
const FALLBACK_SLUG: &str = "section";

/// Upper bound on numeric suffix probing before giving up.
const MAX_SUFFIX_ATTEMPTS: usize = 999;

/// Compute a URL-safe slug from heading text.
///
/// Lower-cases the text, collapses every run of non-alphanumeric
/// characters to a single `-`, and trims leading/trailing separators.
/// Returns an empty string when the text contains no alphanumerics.
///
/// # Examples
///
/// ```
/// use mdview_renderer::slugify;
///
/// assert_eq!(slugify("Section Title"), "section-title");
/// assert_eq!(slugify("Install `npm`!"), "install-npm");
/// assert_eq!(slugify("---"), "");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Per-document anchor allocator.
///
/// Tracks every anchor handed out so far and disambiguates collisions
/// deterministically: the first "Notes" heading gets `notes`, the next
/// `notes-1`, and so on, always taking the first unused candidate.
/// One instance covers one document; a fresh document gets a fresh
/// `Slugger`.
#[derive(Debug, Default)]
pub struct Slugger {
    assigned: HashSet<String>,
}

impl Slugger {
    /// Create a new slugger with no assigned anchors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a unique anchor for the given heading text.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::AnchorOverflow`] when the suffix probe
    /// exhausts its bound, which takes on the order of a thousand
    /// identically-titled headings.
    pub fn assign(&mut self, text: &str) -> Result<String, HeaderError> {
        let base = slugify(text);
        let base = if base.is_empty() {
            FALLBACK_SLUG.to_owned()
        } else {
            base
        };

        if self.assigned.insert(base.clone()) {
            return Ok(base);
        }

        for n in 1..=MAX_SUFFIX_ATTEMPTS {
            let candidate = format!("{base}-{n}");
            if self.assigned.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }

        Err(HeaderError::AnchorOverflow(base))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("a -- b ?? c"), "a-b-c");
    }

    #[test]
    fn test_slugify_trims_separators() {
        assert_eq!(slugify("  !Intro!  "), "intro");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Step 2 of 3"), "step-2-of-3");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Über uns"), "über-uns");
    }

    #[test]
    fn test_slugify_empty_for_symbols_only() {
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_slugger_first_wins_base() {
        let mut slugger = Slugger::new();

        assert_eq!(slugger.assign("Notes").unwrap(), "notes");
    }

    #[test]
    fn test_slugger_suffixes_duplicates() {
        let mut slugger = Slugger::new();

        assert_eq!(slugger.assign("FAQ").unwrap(), "faq");
        assert_eq!(slugger.assign("FAQ").unwrap(), "faq-1");
        assert_eq!(slugger.assign("FAQ").unwrap(), "faq-2");
    }

    #[test]
    fn test_slugger_skips_taken_candidates() {
        let mut slugger = Slugger::new();

        // "Notes 1" claims notes-1 before the duplicate "Notes" probes it.
        assert_eq!(slugger.assign("Notes").unwrap(), "notes");
        assert_eq!(slugger.assign("Notes 1").unwrap(), "notes-1");
        assert_eq!(slugger.assign("Notes").unwrap(), "notes-2");
    }

    #[test]
    fn test_slugger_fallback_for_empty_slug() {
        let mut slugger = Slugger::new();

        assert_eq!(slugger.assign("!!!").unwrap(), "section");
        assert_eq!(slugger.assign("???").unwrap(), "section-1");
    }

    #[test]
    fn test_slugger_overflow_after_bound() {
        let mut slugger = Slugger::new();

        for _ in 0..1000 {
            slugger.assign("dup").unwrap();
        }

        assert!(matches!(
            slugger.assign("dup"),
            Err(HeaderError::AnchorOverflow(base)) if base == "dup"
        ));
    }
}
