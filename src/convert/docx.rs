//! DOCX document converter implementation.

use crate::detect::{file_name, FileType};
use crate::error::Result;
use crate::extract::{DocxTextExtractor, TextExtractor};
use crate::model::DocumentContent;
use crate::section::count_characters;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use super::{assemble, decode, ensure_exists, read_document, ConversionOptions, DocumentConverter};

/// DOCX document converter.
///
/// A document that cannot be decoded still converts: the result carries the
/// file size and a fixed notice in place of the text. Only a missing or
/// unreadable file is an error.
#[derive(Clone)]
pub struct DocxConverter {
    extractor: Arc<dyn TextExtractor>,
}

impl DocxConverter {
    /// Create a new DOCX converter.
    pub fn new() -> Self {
        Self::with_extractor(Arc::new(DocxTextExtractor::new()))
    }

    /// Create a converter with a custom text extractor.
    pub fn with_extractor(extractor: Arc<dyn TextExtractor>) -> Self {
        Self { extractor }
    }
}

impl Default for DocxConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Basic file info used when the DOCX content cannot be extracted.
pub fn fallback_document(file_name: String, file_size: u64) -> DocumentContent {
    let text = format!(
        "DOCX File: {}\nSize: {} bytes\n\nDOCX content extraction failed, using basic file info.",
        file_name, file_size
    );
    DocumentContent::new(file_name, FileType::Docx, text).with_file_size(file_size)
}

#[async_trait]
impl DocumentConverter for DocxConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    async fn convert(&self, path: &Path, options: &ConversionOptions) -> Result<DocumentContent> {
        log::info!("Reading DOCX file: {}", path.display());
        ensure_exists(path).await?;

        let data = read_document(path, FileType::Docx).await?;
        let file_size = data.len() as u64;

        match decode(self.extractor.clone(), data).await {
            Ok(text) => {
                log::info!("DOCX read successfully, characters: {}", count_characters(&text));
                Ok(assemble(file_name(path), FileType::Docx, text, options))
            }
            Err(e) => {
                log::warn!("DOCX parser error, using fallback: {}", e);
                Ok(fallback_document(file_name(path), file_size))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Failing;

    impl TextExtractor for Failing {
        fn extract_text(&self, _data: &[u8]) -> Result<String> {
            Err(Error::DocxParse("invalid Zip archive".to_string()))
        }
    }

    #[test]
    fn test_docx_converter_extensions() {
        let converter = DocxConverter::new();
        assert_eq!(converter.supported_extensions(), &["docx"]);
        assert!(converter.supports_extension("DOCX"));
        assert!(!converter.supports_extension("doc"));
        assert_eq!(converter.name(), "docx");
    }

    #[test]
    fn test_fallback_document() {
        let doc = fallback_document("cv.docx".to_string(), 1234);

        assert_eq!(doc.file_type, FileType::Docx);
        assert_eq!(doc.metadata.file_size, Some(1234));
        assert_eq!(
            doc.text,
            "DOCX File: cv.docx\nSize: 1234 bytes\n\nDOCX content extraction failed, using basic file info."
        );
        assert_eq!(doc.metadata.word_count, 15);
        assert_eq!(doc.metadata.character_count, count_characters(&doc.text));
        assert!(doc.sections.is_none());
    }

    #[tokio::test]
    async fn test_decode_failure_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"not a zip archive at all").unwrap();

        let converter = DocxConverter::with_extractor(Arc::new(Failing));
        let doc = converter
            .convert(&path, &ConversionOptions::new().with_sections(true))
            .await
            .unwrap();

        assert_eq!(doc.file_name, "broken.docx");
        assert_eq!(doc.metadata.file_size, Some(24));
        assert!(doc.text.contains("DOCX content extraction failed"));
        assert!(doc.sections.is_none());
    }

    #[tokio::test]
    async fn test_real_extractor_falls_back_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.docx");
        std::fs::write(&path, b"garbage").unwrap();

        let doc = DocxConverter::new()
            .convert(&path, &ConversionOptions::new())
            .await
            .unwrap();
        assert_eq!(doc.metadata.file_size, Some(7));
        assert!(doc.text.starts_with("DOCX File: garbage.docx\nSize: 7 bytes"));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = DocxConverter::new()
            .convert(Path::new("no/such/cv.docx"), &ConversionOptions::new())
            .await;
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
