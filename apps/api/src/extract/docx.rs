//! DOCX text extraction — paragraphs and table cells out of
//! `word/document.xml`.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::{ExtractError, ExtractedDocument};

pub(super) fn extract(bytes: &[u8]) -> Result<ExtractedDocument, ExtractError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(format!("missing word/document.xml: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    let text = document_text(&xml).map_err(|e| ExtractError::Docx(e.to_string()))?;
    // OOXML does not materialize page breaks, so a DOCX counts as one page.
    Ok(ExtractedDocument { text, pages: 1 })
}

/// Walks the OOXML body: paragraphs (`w:p`) become lines; table cells
/// (`w:tc`) within a row are joined with " | " so table text reads linearly.
fn document_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut lines: Vec<String> = Vec::new();
    let mut paragraph = String::new();
    let mut cells: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_cell = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:t" => in_text = true,
                b"w:tc" => {
                    in_cell = true;
                    cell.clear();
                }
                _ => {}
            },
            Event::Text(t) => {
                if in_text {
                    let chunk = t.unescape().map_err(quick_xml::Error::from)?;
                    if in_cell {
                        cell.push_str(&chunk);
                    } else {
                        paragraph.push_str(&chunk);
                    }
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if in_cell {
                        // Paragraph breaks inside a cell read as spaces.
                        if !cell.is_empty() && !cell.ends_with(' ') {
                            cell.push(' ');
                        }
                    } else {
                        let line = paragraph.trim();
                        if !line.is_empty() {
                            lines.push(line.to_string());
                        }
                        paragraph.clear();
                    }
                }
                b"w:tc" => {
                    in_cell = false;
                    cells.push(cell.trim().to_string());
                }
                b"w:tr" => {
                    if !cells.is_empty() {
                        lines.push(cells.join(" | "));
                        cells.clear();
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let cursor = Cursor::new(&mut buf);
            let mut writer = zip::ZipWriter::new(cursor);
            writer
                .start_file("word/document.xml", FileOptions::default())
                .unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf
    }

    const DOC_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Experience</w:t></w:r></w:p>
    <w:p><w:r><w:t>Built APIs in </w:t></w:r><w:r><w:t>Python</w:t></w:r></w:p>
    <w:tbl>
      <w:tr>
        <w:tc><w:p><w:r><w:t>Python</w:t></w:r></w:p></w:tc>
        <w:tc><w:p><w:r><w:t>React</w:t></w:r></w:p></w:tc>
      </w:tr>
    </w:tbl>
  </w:body>
</w:document>"#;

    #[test]
    fn test_paragraphs_become_lines_and_runs_join() {
        let doc = extract(&docx_bytes(DOC_XML)).unwrap();
        let lines: Vec<&str> = doc.text.lines().collect();
        assert_eq!(lines[0], "Experience");
        assert_eq!(lines[1], "Built APIs in Python");
    }

    #[test]
    fn test_table_cells_join_with_pipes() {
        let doc = extract(&docx_bytes(DOC_XML)).unwrap();
        assert!(doc.text.lines().any(|l| l == "Python | React"));
    }

    #[test]
    fn test_docx_counts_as_one_page() {
        let doc = extract(&docx_bytes(DOC_XML)).unwrap();
        assert_eq!(doc.pages, 1);
    }

    #[test]
    fn test_archive_without_document_xml_errors() {
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            writer
                .start_file("word/other.xml", FileOptions::default())
                .unwrap();
            writer.write_all(b"<x/>").unwrap();
            writer.finish().unwrap();
        }
        let result = extract(&buf);
        assert!(matches!(result, Err(ExtractError::Docx(_))));
    }
}
