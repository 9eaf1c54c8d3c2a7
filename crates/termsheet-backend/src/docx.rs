//! DOCX (Microsoft Word) document reader.
//!
//! DOCX files are ZIP archives; all body text lives in `word/document.xml`.
//! This reader walks that one part with a pull parser and produces the
//! paragraph/table shape the extraction engine consumes:
//!
//! - body-level `w:p` elements become paragraphs; `w:t` run text is
//!   concatenated, `w:br`/`w:cr` contribute `\n` and `w:tab` contributes `\t`
//! - top-level `w:tbl`/`w:tr`/`w:tc` become tables of rows of cells; a cell's
//!   text is its paragraph texts joined with `\n`
//! - tables nested inside cells and textbox content are skipped; only body
//!   paragraphs and top-level tables are reported

use crate::traits::DocumentReader;
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use termsheet_core::{Paragraph, RawDocument, Result, Table, TableCell, TableRow, TermsheetError};
use zip::ZipArchive;

/// DOCX document reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocxReader;

impl DocxReader {
    /// Create a new DOCX reader instance.
    #[inline]
    #[must_use = "creates a reader instance that should be used for parsing"]
    pub const fn new() -> Self {
        Self
    }

    /// Extract `word/document.xml` from the ZIP container.
    fn read_document_xml(data: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| TermsheetError::Parse(format!("not a DOCX (ZIP) archive: {e}")))?;

        let mut entry = archive
            .by_name("word/document.xml")
            .map_err(|e| TermsheetError::Parse(format!("missing word/document.xml: {e}")))?;

        let mut xml = String::new();
        entry.read_to_string(&mut xml)?;
        Ok(xml)
    }

    /// Walk `document.xml` and collect paragraphs and top-level tables.
    fn parse_document_xml(xml: &str) -> Result<RawDocument> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut state = WalkState::default();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => state.handle_start(e.name().as_ref()),
                Ok(Event::Empty(e)) => state.handle_empty(e.name().as_ref()),
                Ok(Event::End(e)) => state.handle_end(e.name().as_ref()),
                Ok(Event::Text(e)) => {
                    if state.collecting_text() {
                        let text = e.unescape().map_err(|err| {
                            TermsheetError::Parse(format!("malformed text content: {err}"))
                        })?;
                        state.paragraph_text.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    return Err(TermsheetError::Parse(format!(
                        "malformed word/document.xml: {err}"
                    )));
                }
            }
            buf.clear();
        }

        debug!(
            "parsed DOCX body: {} paragraphs, {} tables",
            state.paragraphs.len(),
            state.tables.len()
        );

        Ok(RawDocument {
            paragraphs: state.paragraphs,
            tables: state.tables,
        })
    }
}

impl DocumentReader for DocxReader {
    fn read_bytes(&self, data: &[u8]) -> Result<RawDocument> {
        let xml = Self::read_document_xml(data)?;
        Self::parse_document_xml(&xml)
    }
}

/// Parser state for the `document.xml` walk.
#[derive(Debug, Default)]
struct WalkState {
    in_body: bool,
    // Textbox content (w:txbxContent) is anchored inside body runs but is not
    // body text; everything under it is suppressed.
    in_textbox: bool,
    // 0 = outside tables, 1 = top-level table, >= 2 = nested (suppressed).
    table_depth: usize,
    in_row: bool,
    in_cell: bool,
    in_paragraph: bool,
    in_run: bool,
    in_text: bool,

    paragraph_text: String,
    cell_paragraphs: Vec<String>,
    row_cells: Vec<TableCell>,
    table_rows: Vec<TableRow>,

    paragraphs: Vec<Paragraph>,
    tables: Vec<Table>,
}

impl WalkState {
    /// True while positioned inside a `w:t` whose text belongs to the output.
    fn collecting_text(&self) -> bool {
        self.in_text && self.in_run && !self.in_textbox
    }

    /// True where a starting `w:p` contributes to the output: directly in the
    /// body, or inside a top-level table cell.
    fn paragraph_scope(&self) -> bool {
        self.in_body
            && !self.in_textbox
            && (self.table_depth == 0 || (self.table_depth == 1 && self.in_cell))
    }

    fn handle_start(&mut self, name: &[u8]) {
        match name {
            b"w:body" => self.in_body = true,
            b"w:txbxContent" => self.in_textbox = true,
            b"w:tbl" if self.in_body && !self.in_textbox => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.table_rows.clear();
                }
            }
            b"w:tr" if self.table_depth == 1 && !self.in_textbox => {
                self.in_row = true;
                self.row_cells.clear();
            }
            b"w:tc" if self.table_depth == 1 && self.in_row && !self.in_textbox => {
                self.in_cell = true;
                self.cell_paragraphs.clear();
            }
            b"w:p" if self.paragraph_scope() => {
                self.in_paragraph = true;
                self.paragraph_text.clear();
            }
            b"w:r" if self.in_paragraph && !self.in_textbox => self.in_run = true,
            b"w:t" if self.in_run && !self.in_textbox => self.in_text = true,
            _ => {}
        }
    }

    fn handle_empty(&mut self, name: &[u8]) {
        match name {
            // Break and tab runs become the characters the line builder
            // splits on.
            b"w:br" | b"w:cr" if self.in_run && !self.in_textbox => {
                self.paragraph_text.push('\n');
            }
            b"w:tab" if self.in_run && !self.in_textbox => self.paragraph_text.push('\t'),
            // Self-closing empty paragraph.
            b"w:p" if self.paragraph_scope() => self.push_paragraph(String::new()),
            _ => {}
        }
    }

    fn handle_end(&mut self, name: &[u8]) {
        match name {
            b"w:body" => self.in_body = false,
            b"w:txbxContent" => self.in_textbox = false,
            b"w:tbl" if self.table_depth > 0 && !self.in_textbox => {
                self.table_depth -= 1;
                if self.table_depth == 0 {
                    self.tables.push(Table {
                        rows: std::mem::take(&mut self.table_rows),
                    });
                }
            }
            b"w:tr" if self.table_depth == 1 && self.in_row && !self.in_textbox => {
                self.in_row = false;
                self.table_rows.push(TableRow {
                    cells: std::mem::take(&mut self.row_cells),
                });
            }
            b"w:tc" if self.table_depth == 1 && self.in_cell && !self.in_textbox => {
                self.in_cell = false;
                self.row_cells.push(TableCell {
                    text: self.cell_paragraphs.join("\n"),
                });
                self.cell_paragraphs.clear();
            }
            b"w:p" if self.in_paragraph && !self.in_textbox => {
                let text = std::mem::take(&mut self.paragraph_text);
                self.push_paragraph(text);
            }
            b"w:r" if !self.in_textbox => self.in_run = false,
            b"w:t" if !self.in_textbox => self.in_text = false,
            _ => {}
        }
    }

    fn push_paragraph(&mut self, text: String) {
        self.in_paragraph = false;
        if self.in_cell && self.table_depth == 1 {
            self.cell_paragraphs.push(text);
        } else {
            self.paragraphs.push(Paragraph { text });
        }
    }
}
