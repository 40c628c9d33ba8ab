//! Raw text extraction from binary document formats.
//!
//! Extractors only decode bytes into plain text. File access, metadata and
//! section handling live in the converters.

mod docx;
mod pdf;

pub use docx::DocxTextExtractor;
pub use pdf::PdfTextExtractor;

use crate::error::Result;

/// Decodes a binary document into plain text.
pub trait TextExtractor: Send + Sync {
    /// Extract the raw text of a document held in memory.
    fn extract_text(&self, data: &[u8]) -> Result<String>;
}
