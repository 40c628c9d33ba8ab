//! Document converters and extension-based dispatch.
//!
//! A converter turns a file on disk into a [`DocumentContent`]. The
//! [`ConverterRegistry`] maps file extensions to converters and rejects
//! unknown extensions before touching the file system.
//!
//! # Example
//!
//! ```no_run
//! use docjson::convert::{ConversionOptions, ConverterRegistry};
//! use std::path::Path;
//!
//! # async fn run() -> docjson::Result<()> {
//! let registry = ConverterRegistry::with_defaults();
//! let options = ConversionOptions::new().with_sections(true);
//! let doc = registry.convert(Path::new("cv.pdf"), &options).await?;
//! println!("{} words", doc.metadata.word_count);
//! # Ok(())
//! # }
//! ```

mod docx;
mod pdf;

pub use docx::{fallback_document, DocxConverter};
pub use pdf::PdfConverter;

use crate::detect::{file_extension, sniff_file_type, FileType};
use crate::error::{Error, Result};
use crate::extract::TextExtractor;
use crate::model::DocumentContent;
use crate::section::extract_sections;
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConversionOptions {
    /// Split the text into sections
    pub include_sections: bool,

    /// Maximum number of pages to process.
    ///
    /// Stored but not enforced by any converter.
    pub max_pages: Option<u32>,

    /// Section delimiter (blank-line run when `None`)
    pub section_delimiter: Option<Regex>,
}

impl ConversionOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable section extraction.
    pub fn with_sections(mut self, include: bool) -> Self {
        self.include_sections = include;
        self
    }

    /// Set the page cap.
    pub fn with_max_pages(mut self, pages: u32) -> Self {
        self.max_pages = Some(pages);
        self
    }

    /// Set the section delimiter from a regular expression.
    pub fn with_delimiter(mut self, pattern: &str) -> Result<Self> {
        self.section_delimiter = Some(Regex::new(pattern)?);
        Ok(self)
    }
}

/// Trait for document converters.
///
/// Implement this trait to add support for a new document format.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    /// Get the supported file extensions for this converter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert the file at the given path.
    async fn convert(&self, path: &Path, options: &ConversionOptions) -> Result<DocumentContent>;

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.trim_start_matches('.').to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document converters.
///
/// The registry maps file extensions to converters and provides
/// convenient methods for converting documents.
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn DocumentConverter>>,
    by_name: HashMap<String, Arc<dyn DocumentConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the PDF and DOCX converters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfConverter::new()));
        registry.register(Arc::new(DocxConverter::new()));
        registry
    }

    /// Register a converter.
    ///
    /// The converter will be registered for all its supported extensions.
    pub fn register(&mut self, converter: Arc<dyn DocumentConverter>) {
        for ext in converter.supported_extensions() {
            self.converters
                .insert(ext.to_lowercase(), converter.clone());
        }
        self.by_name
            .insert(converter.name().to_lowercase(), converter);
    }

    /// Get a converter by file extension (with or without the leading dot).
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.converters
            .get(&ext.trim_start_matches('.').to_lowercase())
            .cloned()
    }

    /// Get a converter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.get_by_extension(ext).is_some()
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.converters.keys().map(|s| s.as_str()).collect()
    }

    /// Convert a file using the converter registered for its extension.
    ///
    /// Fails with [`Error::UnsupportedFormat`] before any file access when
    /// no converter matches.
    pub async fn convert(&self, path: &Path, options: &ConversionOptions) -> Result<DocumentContent> {
        let ext = file_extension(path);

        log::info!("Processing file: {}", crate::detect::file_name(path));
        log::info!("File type: {}", ext);

        let converter = self
            .get_by_extension(&ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.clone()))?;

        log::debug!("Dispatching {} to the {} converter", path.display(), converter.name());
        converter.convert(path, options).await
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Fail with [`Error::FileNotFound`] unless `path` exists.
pub(crate) async fn ensure_exists(path: &Path) -> Result<()> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => Ok(()),
        _ => Err(Error::FileNotFound(path.to_path_buf())),
    }
}

/// Read the whole file, warning when its content does not look like `expected`.
pub(crate) async fn read_document(path: &Path, expected: FileType) -> Result<Vec<u8>> {
    let data = tokio::fs::read(path).await?;

    match sniff_file_type(&data) {
        Some(found) if found == expected => {}
        found => log::warn!(
            "{} does not look like a {} file (detected: {})",
            path.display(),
            expected,
            found.map_or_else(|| "unknown".to_string(), |f| f.to_string())
        ),
    }

    Ok(data)
}

/// Run the extractor on the blocking pool.
pub(crate) async fn decode(extractor: Arc<dyn TextExtractor>, data: Vec<u8>) -> Result<String> {
    tokio::task::spawn_blocking(move || extractor.extract_text(&data))
        .await
        .map_err(|e| Error::TextExtract(format!("decoder task failed: {}", e)))?
}

/// Assemble the final document, adding sections when requested.
pub(crate) fn assemble(
    file_name: String,
    file_type: FileType,
    text: String,
    options: &ConversionOptions,
) -> DocumentContent {
    if let Some(max_pages) = options.max_pages {
        log::debug!("max_pages={} is not enforced", max_pages);
    }

    let sections = if options.include_sections && !text.is_empty() {
        Some(extract_sections(&text, options))
    } else {
        None
    };

    let mut doc = DocumentContent::new(file_name, file_type, text);
    if let Some(sections) = sections {
        log::info!("Sections extracted: {}", sections.len());
        doc = doc.with_sections(sections);
    }
    doc
}
