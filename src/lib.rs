//! # docjson
//!
//! Convert PDF and DOCX documents into a normalized JSON representation.
//!
//! A conversion extracts the raw text of a document, counts its words and
//! characters, optionally splits it into sections and serializes the result.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docjson::{output_path_for, process_document, save_json, ConversionOptions, JsonFormat};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> docjson::Result<()> {
//!     let options = ConversionOptions::new().with_sections(true);
//!     let doc = process_document("documents/cv.pdf", &options).await?;
//!
//!     let path = output_path_for("documents/cv.pdf", "output");
//!     save_json(&doc, &path, JsonFormat::Pretty).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - **PDF**: any failure is returned as [`Error::PdfConversion`]
//! - **DOCX**: undecodable content still yields a document holding the file
//!   size and a fallback notice
//! - **Sections**: split on blank lines, page markers like `-- 2 of 5 --`
//!   dropped, titles numbered by position before filtering

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod section;

// Re-export commonly used types
pub use convert::{ConversionOptions, ConverterRegistry, DocumentConverter, DocxConverter, PdfConverter};
pub use detect::{file_extension, file_name, sniff_file_type, FileType};
pub use error::{Error, Result};
pub use extract::{DocxTextExtractor, PdfTextExtractor, TextExtractor};
pub use model::{DocumentContent, DocumentSection, Metadata};
pub use render::{output_path_for, save_json, to_json, JsonFormat, DEFAULT_OUTPUT_DIR};
pub use section::{count_characters, count_words, extract_sections, is_separator, SectionSplitter};

use std::path::Path;

/// Convert a PDF or DOCX file using the default converters.
///
/// The converter is chosen by file extension, case-insensitively. Any other
/// extension fails with [`Error::UnsupportedFormat`] before the file is read.
///
/// # Example
///
/// ```no_run
/// use docjson::{process_document, ConversionOptions};
///
/// # async fn run() -> docjson::Result<()> {
/// let doc = process_document("cv.docx", &ConversionOptions::default()).await?;
/// println!("{} characters", doc.metadata.character_count);
/// # Ok(())
/// # }
/// ```
pub async fn process_document<P: AsRef<Path>>(
    path: P,
    options: &ConversionOptions,
) -> Result<DocumentContent> {
    ConverterRegistry::with_defaults()
        .convert(path.as_ref(), options)
        .await
}

/// Convert a file and write its JSON to `<output_dir>/<file-name>.json`.
///
/// Nothing is written when the conversion fails. Returns the converted
/// document and the path it was written to.
pub async fn convert_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    options: &ConversionOptions,
    format: JsonFormat,
) -> Result<(DocumentContent, std::path::PathBuf)> {
    let doc = process_document(input.as_ref(), options).await?;
    let path = output_path_for(input, output_dir);
    save_json(&doc, &path, format).await?;
    Ok((doc, path))
}
