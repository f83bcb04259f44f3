//! Document extraction collaborators — PDF and DOCX bytes to plain text.
//!
//! The analysis core only ever sees the extracted text; extraction failures
//! stop at this boundary. Multi-column layouts and scanned images are known
//! to degrade extraction quality, so the output is best-effort text, not a
//! guaranteed-complete transcript.

mod docx;
mod pdf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = std::path::Path::new(name).extension()?.to_str()?;
        Self::from_extension(ext)
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read PDF: {0}")]
    Pdf(String),
    #[error("failed to read DOCX: {0}")]
    Docx(String),
}

/// Extracted plain text plus the page count used for the level heuristic.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    pub pages: usize,
}

/// Dispatches on the declared kind. Corrupt bytes come back as a typed
/// error for the HTTP layer to report; the analysis core has no failure
/// mode tied to document format.
pub fn extract_document(kind: DocumentKind, bytes: &[u8]) -> Result<ExtractedDocument, ExtractError> {
    match kind {
        DocumentKind::Pdf => pdf::extract(bytes),
        DocumentKind::Docx => docx::extract(bytes),
    }
}
