//! PDF text extraction backed by pdf-extract.

use crate::error::Result;

use super::TextExtractor;

/// Extracts the text layer of a PDF.
///
/// Every page is followed by a `-- N of M --` marker line, set off by blank
/// lines, so page boundaries survive in the flat text.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor {
    _private: (),
}

impl PdfTextExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(data)?;
        log::debug!("pdf-extract returned {} pages", pages.len());
        Ok(join_pages(&pages))
    }
}

/// Concatenate page texts, appending a page marker after each page.
fn join_pages(pages: &[String]) -> String {
    let total = pages.len();
    let mut text = String::new();
    for (index, page) in pages.iter().enumerate() {
        text.push_str(page);
        text.push_str(&format!("\n\n-- {} of {} --\n\n", index + 1, total));
    }
    text
}
