//! Document format detection.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported input document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Docx,
}

impl FileType {
    /// Map an extension (with or without the leading dot) to a file type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Some(FileType::Pdf),
            "docx" => Some(FileType::Docx),
            _ => None,
        }
    }

    /// Canonical extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// ZIP local file header, the container of every DOCX package.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Lowercased extension of `path` including the leading dot (e.g. `".pdf"`).
///
/// Returns an empty string when the path has no extension.
pub fn file_extension<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Final component of `path`, as used for `fileName` in the output.
pub fn file_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Guess the document format from its leading bytes.
///
/// A ZIP container is reported as DOCX; the package contents are not checked.
pub fn sniff_file_type(data: &[u8]) -> Option<FileType> {
    if data.starts_with(PDF_MAGIC) {
        Some(FileType::Pdf)
    } else if data.starts_with(ZIP_MAGIC) {
        Some(FileType::Docx)
    } else {
        None
    }
}
