//! Document identity and model.

use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque document identifier, derived from the filename stem.
///
/// `getting-started.md` yields the id `getting-started`. Unique within
/// a repository; round-trips through [`crate::DocRepository::get`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocId(String);

impl DocId {
    /// Derive the id from a file name by dropping the extension.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        let stem = Path::new(name)
            .file_stem()
            .map_or_else(|| name.to_owned(), |s| s.to_string_lossy().into_owned());
        Self(stem)
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One discoverable Markdown document.
///
/// Created at repository construction; immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Unique identifier, used in the `doc` request parameter.
    pub id: DocId,
    /// Display title for the switcher menu.
    pub title: String,
    /// Path usable with the storage backend to read the raw text.
    pub path: PathBuf,
}

/// Build a display title from a filename stem.
///
/// Separators become spaces and each word is capitalized:
/// `getting-started` becomes `Getting Started`.
pub(crate) fn title_from_stem(stem: &str) -> String {
    stem.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_doc_id_from_file_name() {
        assert_eq!(DocId::from_file_name("intro.md").as_str(), "intro");
        assert_eq!(
            DocId::from_file_name("getting-started.md").as_str(),
            "getting-started"
        );
    }

    #[test]
    fn test_doc_id_uppercase_extension() {
        assert_eq!(DocId::from_file_name("README.MD").as_str(), "README");
    }

    #[test]
    fn test_doc_id_without_extension() {
        assert_eq!(DocId::from_file_name("notes").as_str(), "notes");
    }

    #[test]
    fn test_doc_id_display() {
        assert_eq!(DocId::from_file_name("intro.md").to_string(), "intro");
    }

    #[test]
    fn test_title_from_stem_capitalizes_words() {
        assert_eq!(title_from_stem("getting-started"), "Getting Started");
        assert_eq!(title_from_stem("api_reference"), "Api Reference");
    }

    #[test]
    fn test_title_from_stem_single_word() {
        assert_eq!(title_from_stem("intro"), "Intro");
    }

    #[test]
    fn test_title_from_stem_collapses_empty_words() {
        assert_eq!(title_from_stem("a--b"), "A B");
    }
}
