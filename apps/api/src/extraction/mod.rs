//! Document Text Extractor: turns an uploaded PDF or DOCX resume into plain text.
//!
//! PDFs go through a layout-aware pass (`pdf-extract`) first and fall back to a
//! page-by-page pass over the raw object tree (`lopdf`). DOCX files are read with
//! `docx-lite`. The source file is only ever read.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file format '{0}'. Only PDF and DOCX are supported")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from {path}: {reason}")]
    Failed { path: String, reason: String },
}

/// Document formats accepted at the upload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Maps a bare extension (no dot, any case) to a document kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// Canonical lower-case extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| ExtractionError::UnsupportedFormat(ext.to_string()))
    }
}

/// Extracts best-effort plain text from a `.pdf` or `.docx` file.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    match DocumentKind::from_path(path)? {
        DocumentKind::Pdf => extract_pdf_text(path),
        DocumentKind::Docx => extract_docx_text(path),
    }
}

fn extract_pdf_text(path: &Path) -> Result<String, ExtractionError> {
    let layout_error = match extract_pdf_layout(path) {
        Ok(text) => {
            debug!(
                "PDF extracted with pdf-extract: {} chars from {}",
                text.len(),
                path.display()
            );
            return Ok(text);
        }
        Err(e) => e,
    };

    warn!(
        "Layout-aware extraction failed for {}: {layout_error}; trying page-by-page",
        path.display()
    );

    match extract_pdf_pages(path) {
        Ok(text) => {
            debug!(
                "PDF extracted page-by-page with lopdf: {} chars from {}",
                text.len(),
                path.display()
            );
            Ok(text)
        }
        Err(page_error) => Err(ExtractionError::Failed {
            path: path.display().to_string(),
            reason: format!("layout-aware: {layout_error}; page-by-page: {page_error}"),
        }),
    }
}

/// pdf-extract panics on some malformed inputs; a panic counts as a failed attempt.
fn extract_pdf_layout(path: &Path) -> Result<String, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err("pdf-extract panicked while decoding the document".to_string()),
    }
}

fn extract_pdf_pages(path: &Path) -> Result<String, String> {
    let document = lopdf::Document::load(path).map_err(|e| e.to_string())?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        let page_text = document
            .extract_text(&[*page_number])
            .map_err(|e| format!("page {page_number}: {e}"))?;
        text.push_str(&page_text);
        text.push('\n');
    }
    Ok(text)
}

fn extract_docx_text(path: &Path) -> Result<String, ExtractionError> {
    let text = docx_lite::extract_text(path).map_err(|e| ExtractionError::Failed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    debug!(
        "DOCX extracted: {} chars from {}",
        text.len(),
        path.display()
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_kind_from_extension_is_case_insensitive() {
        assert_eq!(DocumentKind::from_extension("PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("Docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_extension("doc"), None);
    }

    #[test]
    fn test_unsupported_extension_rejected_before_reading() {
        // Path does not exist: the format check must fire first.
        let err = extract_text(Path::new("/nonexistent/resume.txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(ref ext) if ext == "txt"));
    }

    #[test]
    fn test_missing_extension_rejected() {
        let err = DocumentKind::from_path(Path::new("resume")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_corrupt_pdf_fails_after_both_strategies() {
        let file = write_temp(".pdf", b"this is definitely not a pdf");
        let err = extract_text(file.path()).unwrap_err();
        match err {
            ExtractionError::Failed { reason, .. } => {
                assert!(reason.contains("layout-aware"), "reason: {reason}");
                assert!(reason.contains("page-by-page"), "reason: {reason}");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_docx_fails() {
        let file = write_temp(".docx", b"not a zip archive");
        let err = extract_text(file.path()).unwrap_err();
        assert!(matches!(err, ExtractionError::Failed { .. }));
    }

    #[test]
    fn test_extraction_leaves_source_file_in_place() {
        let file = write_temp(".pdf", b"%PDF-garbage");
        let _ = extract_text(file.path());
        assert!(file.path().exists());
    }
}
