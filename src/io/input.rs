use std::path::Path;

use tracing::debug;

use crate::error::ExtractionError;

/// Turns a source document into plain text
pub trait DocumentExtractor: Send + Sync {
    /// Extract the document's text. Empty text is a valid result.
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// Reads `.pdf` files through pdf-extract and anything else as UTF-8 text
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextExtractor;

impl DocumentExtractor for FileTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        let text = if is_pdf(path) {
            extract_pdf_text(path)?
        } else {
            std::fs::read_to_string(path).map_err(|source| ExtractionError::Read {
                path: path.to_path_buf(),
                source,
            })?
        };

        debug!("Extracted {} chars from {:?}", text.len(), path);
        Ok(text.trim().to_string())
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Text layer of every page, in page order
fn extract_pdf_text(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractionError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single-page PDF with one line of Helvetica text
    fn make_test_pdf(text: &str) -> Vec<u8> {
        use lopdf::dictionary;
        use lopdf::{Document, Object, Stream};

        let mut doc = Document::with_version("1.4");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        });
        if let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) {
            page.set("Parent", pages_id);
        }

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_text_file_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "\n  Jane Doe, jane@x.com  \n\n").unwrap();

        let text = FileTextExtractor.extract_text(&path).unwrap();
        assert_eq!(text, "Jane Doe, jane@x.com");
    }

    #[test]
    fn test_empty_file_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.md");
        std::fs::write(&path, "").unwrap();

        assert_eq!(FileTextExtractor.extract_text(&path).unwrap(), "");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = FileTextExtractor.extract_text(&path).unwrap_err();
        assert!(matches!(err, ExtractionError::Read { .. }));
    }

    #[test]
    fn test_pdf_text_is_extracted_and_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, make_test_pdf("Jane Doe Python Developer")).unwrap();

        let text = FileTextExtractor.extract_text(&path).unwrap();

        assert!(text.contains("Jane"), "unexpected PDF text: {text:?}");
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_invalid_pdf_is_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.PDF");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let err = FileTextExtractor.extract_text(&path).unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf { .. }));
    }

    #[test]
    fn test_pdf_extension_detection() {
        assert!(is_pdf(Path::new("cv.pdf")));
        assert!(is_pdf(Path::new("CV.Pdf")));
        assert!(!is_pdf(Path::new("cv.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }
}
