//! DOCX text extraction from the `word/document.xml` part.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};

use super::TextExtractor;

/// Main document part inside a DOCX package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts raw text from a DOCX package.
///
/// Each paragraph is followed by a blank line, so paragraph boundaries line
/// up with the default section delimiter. Tabs and explicit breaks inside a
/// paragraph are kept as `\t` and `\n`.
#[derive(Debug, Clone, Default)]
pub struct DocxTextExtractor {
    _private: (),
}

impl DocxTextExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn read_document_part(data: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
        let mut part = archive.by_name(DOCUMENT_PART)?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)?;
        Ok(xml)
    }

    fn text_from_xml(xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut output = String::new();
        let mut in_text = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if e.local_name().as_ref() == b"t" {
                        in_text = true;
                    }
                }
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"tab" => output.push('\t'),
                    b"br" | b"cr" => output.push('\n'),
                    // Self-closing paragraph still ends a block
                    b"p" => output.push_str("\n\n"),
                    _ => {}
                },
                Event::Text(e) => {
                    if in_text {
                        let text = e
                            .unescape()
                            .map_err(|err| Error::DocxParse(err.to_string()))?;
                        output.push_str(&text);
                    }
                }
                Event::CData(e) => {
                    if in_text {
                        output.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::End(e) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"p" => output.push_str("\n\n"),
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(output)
    }
}

impl TextExtractor for DocxTextExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        let xml = Self::read_document_part(data)?;
        log::debug!("{} is {} bytes", DOCUMENT_PART, xml.len());
        Self::text_from_xml(&xml)
    }
}
