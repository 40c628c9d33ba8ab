//! Writing rendered documents to disk.

use std::path::{Path, PathBuf};

use crate::detect::file_name;
use crate::error::Result;
use crate::model::DocumentContent;

use super::{to_json, JsonFormat};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Output path for `input`: `<output_dir>/<original-file-name>.json`.
pub fn output_path_for<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output_dir: Q) -> PathBuf {
    output_dir
        .as_ref()
        .join(format!("{}.json", file_name(input)))
}

/// Render `doc` and write it to `path`, creating parent directories.
pub async fn save_json<P: AsRef<Path>>(
    doc: &DocumentContent,
    path: P,
    format: JsonFormat,
) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(doc, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, json).await?;
    log::info!("JSON saved to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::FileType;

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for("documents/my-cv.pdf", "output"),
            PathBuf::from("output/my-cv.pdf.json")
        );
        assert_eq!(
            output_path_for("Report.DOCX", "/tmp/out"),
            PathBuf::from("/tmp/out/Report.DOCX.json")
        );
    }

    #[tokio::test]
    async fn test_save_json_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("cv.pdf.json");
        let doc = DocumentContent::new("cv.pdf", FileType::Pdf, "Hello there");

        save_json(&doc, &path, JsonFormat::Pretty).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\n  \"fileName\": \"cv.pdf\""));

        let parsed: DocumentContent = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.text, "Hello there");
        assert_eq!(parsed.metadata.word_count, 2);
    }

    #[tokio::test]
    async fn test_save_json_overwrites_in_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx.json");

        let first = DocumentContent::new("cv.docx", FileType::Docx, "first version");
        let second = DocumentContent::new("cv.docx", FileType::Docx, "second");

        save_json(&first, &path, JsonFormat::Compact).await.unwrap();
        save_json(&second, &path, JsonFormat::Compact).await.unwrap();

        let parsed: DocumentContent =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.text, "second");
    }
}
