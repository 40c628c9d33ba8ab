//! PDF document converter implementation.

use crate::detect::{file_name, FileType};
use crate::error::{Error, Result};
use crate::extract::{PdfTextExtractor, TextExtractor};
use crate::model::DocumentContent;
use crate::section::count_characters;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use super::{assemble, decode, ensure_exists, read_document, ConversionOptions, DocumentConverter};

/// PDF document converter.
///
/// Every failure, including a missing file, is returned as
/// [`Error::PdfConversion`] wrapping the cause.
#[derive(Clone)]
pub struct PdfConverter {
    extractor: Arc<dyn TextExtractor>,
}

impl PdfConverter {
    /// Create a new PDF converter backed by pdf-extract.
    pub fn new() -> Self {
        Self::with_extractor(Arc::new(PdfTextExtractor::new()))
    }

    /// Create a converter with a custom text extractor.
    pub fn with_extractor(extractor: Arc<dyn TextExtractor>) -> Self {
        Self { extractor }
    }

    async fn convert_inner(&self, path: &Path, options: &ConversionOptions) -> Result<DocumentContent> {
        log::info!("Reading PDF file: {}", path.display());
        ensure_exists(path).await?;

        let data = read_document(path, FileType::Pdf).await?;
        log::info!("PDF file size: {} bytes", data.len());

        let text = decode(self.extractor.clone(), data).await?;
        log::info!("PDF read successfully, characters: {}", count_characters(&text));

        Ok(assemble(file_name(path), FileType::Pdf, text, options))
    }
}

impl Default for PdfConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentConverter for PdfConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    async fn convert(&self, path: &Path, options: &ConversionOptions) -> Result<DocumentContent> {
        self.convert_inner(path, options).await.map_err(|e| {
            log::warn!("PDF parser error: {}", e);
            Error::pdf(e)
        })
    }
}
