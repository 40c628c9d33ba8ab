//! JSON rendering for converted documents.

use crate::error::{Error, Result};
use crate::model::DocumentContent;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with 2-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &DocumentContent, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::FileType;
    use crate::model::DocumentSection;

    #[test]
    fn test_to_json_pretty() {
        let doc = DocumentContent::new("cv.pdf", FileType::Pdf, "Hello world")
            .with_sections(vec![DocumentSection::new("Section 1", "Hello world", 2)]);

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\n  \"fileName\": \"cv.pdf\""));
        assert!(json.contains("\n    \"wordCount\": 2"));
        assert!(json.contains("\"title\": \"Section 1\""));
    }

    #[test]
    fn test_to_json_compact() {
        let doc = DocumentContent::new("cv.docx", FileType::Docx, "Hello");
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.starts_with("{\"fileName\":\"cv.docx\",\"fileType\":\"docx\""));
    }
}
