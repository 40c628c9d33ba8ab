//! Section extraction over raw document text.
//!
//! Text is split on a delimiter (a run of blank lines by default) and each
//! fragment is trimmed and filtered. Fragments that are empty, too short or
//! bare page markers such as `-- 3 of 10 --` are dropped. Surviving sections
//! are titled after their position in the unfiltered split, so numbering can
//! skip values where fragments were dropped.

use regex::Regex;

use crate::convert::ConversionOptions;
use crate::model::DocumentSection;

/// Default section delimiter: one or more blank lines.
///
/// The class between the newlines is the same set [`is_separator`] accepts.
pub const DEFAULT_DELIMITER: &str =
    r"\n[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]*\n";

/// Fragments with fewer words than this are dropped.
pub const MIN_SECTION_WORD_COUNT: usize = 1;

/// Page markers left behind by PDF text extraction, e.g. `-- 3 of 10 --`.
const PAGE_MARKER_PATTERN: &str = r"^-- [0-9]+ of [0-9]+ --$";

/// Whitespace as counted by word splitting and trimming.
///
/// Differs from [`char::is_whitespace`]: U+FEFF (byte order mark) is a
/// separator, U+0085 (next line) is not.
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Count separator-delimited, non-empty tokens.
pub fn count_words(text: &str) -> usize {
    text.split(is_separator).filter(|word| !word.is_empty()).count()
}

/// Length of `text` in UTF-16 code units.
pub fn count_characters(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Splits text into filtered, labeled sections.
#[derive(Debug, Clone)]
pub struct SectionSplitter {
    delimiter: Regex,
    page_marker: Regex,
    min_word_count: usize,
}

impl SectionSplitter {
    /// Create a splitter using the default blank-line delimiter.
    pub fn new() -> Self {
        Self::with_delimiter(default_delimiter())
    }

    /// Create a splitter with a custom delimiter.
    pub fn with_delimiter(delimiter: Regex) -> Self {
        Self {
            delimiter,
            page_marker: Regex::new(PAGE_MARKER_PATTERN).expect("page marker pattern is valid"),
            min_word_count: MIN_SECTION_WORD_COUNT,
        }
    }

    /// The delimiter pattern in use.
    pub fn delimiter(&self) -> &str {
        self.delimiter.as_str()
    }

    /// Whether `text` is exactly a page marker.
    pub fn is_page_marker(&self, text: &str) -> bool {
        self.page_marker.is_match(text)
    }

    /// Split `text` into sections.
    ///
    /// Capture groups in the delimiter only match; captured text is never
    /// emitted as a fragment and does not shift section numbering.
    pub fn split(&self, text: &str) -> Vec<DocumentSection> {
        let mut sections = Vec::new();

        for (index, fragment) in self.delimiter.split(text).enumerate() {
            let trimmed = fragment.trim_matches(is_separator);
            let word_count = count_words(trimmed);

            if trimmed.is_empty()
                || word_count < self.min_word_count
                || self.is_page_marker(trimmed)
            {
                continue;
            }

            // Numbered by split position, before filtering
            sections.push(DocumentSection::new(
                format!("Section {}", index + 1),
                trimmed,
                word_count,
            ));
        }

        log::debug!(
            "Split text on {:?} into {} sections",
            self.delimiter.as_str(),
            sections.len()
        );

        sections
    }
}

impl Default for SectionSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiled default delimiter.
fn default_delimiter() -> Regex {
    Regex::new(DEFAULT_DELIMITER).expect("default delimiter pattern is valid")
}

/// Extract sections from `text` using the delimiter configured in `options`.
pub fn extract_sections(text: &str, options: &ConversionOptions) -> Vec<DocumentSection> {
    let splitter = match options.section_delimiter {
        Some(ref delimiter) => SectionSplitter::with_delimiter(delimiter.clone()),
        None => SectionSplitter::new(),
    };
    splitter.split(text)
}
