//! Document-level types.

use crate::detect::FileType;
use crate::section::{count_characters, count_words};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A converted document, the unit written to disk as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    /// Original file name (final path component)
    pub file_name: String,

    /// Source format
    pub file_type: FileType,

    /// Full extracted text
    pub text: String,

    /// Counts and timestamps describing `text`
    pub metadata: Metadata,

    /// Sections derived from `text`, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<DocumentSection>>,
}

impl DocumentContent {
    /// Assemble a document from extracted text.
    ///
    /// Word and character counts are computed from `text` and the extraction
    /// timestamp is set to now.
    pub fn new(file_name: impl Into<String>, file_type: FileType, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            file_name: file_name.into(),
            file_type,
            metadata: Metadata::from_text(&text),
            text,
            sections: None,
        }
    }

    /// Attach the source file size in bytes.
    pub fn with_file_size(mut self, bytes: u64) -> Self {
        self.metadata.file_size = Some(bytes);
        self
    }

    /// Attach derived sections.
    pub fn with_sections(mut self, sections: Vec<DocumentSection>) -> Self {
        self.sections = Some(sections);
        self
    }

    /// Number of sections, zero when sections were not extracted.
    pub fn section_count(&self) -> usize {
        self.sections.as_ref().map_or(0, Vec::len)
    }
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Whitespace-delimited token count of the text
    pub word_count: usize,

    /// UTF-16 code unit count of the text
    pub character_count: usize,

    /// Extraction time, ISO-8601 with millisecond precision
    #[serde(serialize_with = "serialize_timestamp")]
    pub extracted_at: DateTime<Utc>,

    /// Source file size in bytes (fallback conversions only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    /// Total number of pages (reserved, not populated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

impl Metadata {
    /// Compute counts for `text` and stamp the current time.
    pub fn from_text(text: &str) -> Self {
        Self {
            word_count: count_words(text),
            character_count: count_characters(text),
            extracted_at: Utc::now(),
            file_size: None,
            page_count: None,
        }
    }
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// A filtered, trimmed slice of the document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSection {
    /// Section label (e.g. "Section 3")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Trimmed section text
    pub content: String,

    /// Page number (reserved, not populated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Whitespace-delimited token count of `content`
    pub word_count: usize,
}

impl DocumentSection {
    /// Create a titled section.
    pub fn new(title: impl Into<String>, content: impl Into<String>, word_count: usize) -> Self {
        Self {
            title: Some(title.into()),
            content: content.into(),
            page: None,
            word_count,
        }
    }
}
