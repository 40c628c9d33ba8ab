//! Integration tests for the converter module.

use async_trait::async_trait;
use docjson::convert::{
    ConversionOptions, ConverterRegistry, DocumentConverter, DocxConverter, PdfConverter,
};
use docjson::error::{Error, Result};
use docjson::{DocumentContent, FileType};
use std::path::Path;
use std::sync::Arc;

/// Mock converter for testing.
struct MockConverter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockConverter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

#[async_trait]
impl DocumentConverter for MockConverter {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    async fn convert(&self, path: &Path, _options: &ConversionOptions) -> Result<DocumentContent> {
        Ok(DocumentContent::new(
            docjson::file_name(path),
            FileType::Docx,
            format!("Converted by {}", self.name),
        ))
    }
}

#[test]
fn test_converter_registry_new() {
    let registry = ConverterRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("pdf"));
    assert!(!registry.supports("docx"));
}

#[test]
fn test_converter_registry_with_defaults() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry.supports("pdf"));
    assert!(registry.supports("PDF")); // Case insensitive
    assert!(registry.supports("docx"));
    assert!(registry.supports(".Docx"));
    assert!(!registry.supports("doc"));
    assert!(!registry.supports("txt"));
}

#[test]
fn test_converter_registry_register() {
    let mut registry = ConverterRegistry::new();
    let converter = Arc::new(MockConverter::new(vec!["odt", "rtf"], "office"));

    registry.register(converter);

    assert!(registry.supports("odt"));
    assert!(registry.supports("rtf"));
    assert!(registry.supports("ODT")); // Case insensitive
}

#[test]
fn test_converter_registry_get_by_extension() {
    let registry = ConverterRegistry::with_defaults();

    let converter = registry.get_by_extension("pdf");
    assert!(converter.is_some());
    assert_eq!(converter.unwrap().name(), "pdf");

    let converter = registry.get_by_extension(".docx");
    assert_eq!(converter.unwrap().name(), "docx");

    let converter = registry.get_by_extension("xlsx");
    assert!(converter.is_none());
}

#[test]
fn test_converter_registry_get_by_name() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry.get_by_name("pdf").is_some());
    assert!(registry.get_by_name("DOCX").is_some()); // Case insensitive
    assert!(registry.get_by_name("unknown").is_none());
}

#[test]
fn test_supported_extensions() {
    let registry = ConverterRegistry::with_defaults();
    let mut extensions = registry.supported_extensions();
    extensions.sort();

    assert_eq!(extensions, vec!["docx", "pdf"]);
}

#[test]
fn test_builtin_converter_extensions() {
    let pdf = PdfConverter::new();
    assert_eq!(pdf.supported_extensions(), &["pdf"]);
    assert!(pdf.supports_extension("PDF"));
    assert!(!pdf.supports_extension("docx"));

    let docx = DocxConverter::new();
    assert_eq!(docx.supported_extensions(), &["docx"]);
    assert!(docx.supports_extension(".DOCX"));
    assert!(!docx.supports_extension("pdf"));
}

#[tokio::test]
async fn test_registry_dispatches_to_registered_converter() {
    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(MockConverter::new(vec!["mock"], "mock-converter")));

    // The mock never touches the file system
    let doc = registry
        .convert(Path::new("report.MOCK"), &ConversionOptions::default())
        .await
        .unwrap();

    assert_eq!(doc.file_name, "report.MOCK");
    assert!(doc.text.contains("mock-converter"));
    assert_eq!(doc.metadata.word_count, 3);
}

#[tokio::test]
async fn test_registry_convert_no_extension_error() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry
        .convert(Path::new("noextension"), &ConversionOptions::default())
        .await;
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_registry_convert_unsupported_extension_error() {
    let registry = ConverterRegistry::with_defaults();

    // The file does not exist; the extension check must fail first
    let err = registry
        .convert(Path::new("missing/test.txt"), &ConversionOptions::default())
        .await
        .unwrap_err();

    assert!(!err.is_not_found());
    assert_eq!(
        err.to_string(),
        "Unsupported file format: .txt. Only .pdf and .docx are supported"
    );
}
