//! Error types for docjson library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docjson operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file extension does not map to any converter.
    #[error("Unsupported file format: {0}. Only .pdf and .docx are supported")]
    UnsupportedFormat(String),

    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any failure on the PDF path, wrapped with its cause.
    #[error("PDF conversion failed: {0}")]
    PdfConversion(#[source] Box<Error>),

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// The DOCX package or its XML is malformed.
    #[error("DOCX parsing error: {0}")]
    DocxParse(String),

    /// The section delimiter is not a valid regular expression.
    #[error("Invalid section delimiter: {0}")]
    InvalidDelimiter(#[from] regex::Error),

    /// Error during JSON rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap an error as a PDF conversion failure.
    pub fn pdf(err: Error) -> Self {
        match err {
            Error::PdfConversion(_) => err,
            other => Error::PdfConversion(Box::new(other)),
        }
    }

    /// Whether this error (or the error it wraps) is a missing input file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::FileNotFound(_) => true,
            Error::Io(e) => e.kind() == io::ErrorKind::NotFound,
            Error::PdfConversion(inner) => inner.is_not_found(),
            _ => false,
        }
    }
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::DocxParse(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::DocxParse(err.to_string())
    }
}
