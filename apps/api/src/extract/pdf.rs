//! PDF text extraction.

use lopdf::Document;

use super::{ExtractError, ExtractedDocument};

pub(super) fn extract(bytes: &[u8]) -> Result<ExtractedDocument, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    // pdf-extract exposes text only; the page count comes from the catalog.
    // A document whose text extracted but whose page tree will not parse is
    // still usable, so that failure degrades to a single page.
    let pages = Document::load_mem(bytes)
        .map(|doc| doc.get_pages().len())
        .unwrap_or(1)
        .max(1);
    Ok(ExtractedDocument {
        text: text.trim().to_string(),
        pages,
    })
}
