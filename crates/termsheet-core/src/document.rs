//! Reader boundary types.
//!
//! A [`RawDocument`] is what a document reader (e.g. the DOCX backend) hands
//! to the extraction engine: paragraphs in document order plus tables as rows
//! of cells in document order. The engine never looks at the container format
//! behind these types.

use serde::{Deserialize, Serialize};

/// A parsed document: ordered paragraphs and ordered tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Body paragraphs in document order.
    pub paragraphs: Vec<Paragraph>,
    /// Top-level tables in document order.
    pub tables: Vec<Table>,
}

/// A single paragraph. The text may contain `\n` for in-paragraph line breaks
/// and `\t` for tab runs; the line builder splits and trims accordingly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

/// A table: ordered rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

/// A table row: ordered cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A table cell. Multi-paragraph cells carry their paragraph texts joined
/// with `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
}

impl Paragraph {
    /// Create a paragraph from text.
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TableCell {
    /// Create a cell from text.
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TableRow {
    /// Create a row from cell texts.
    #[must_use]
    pub fn from_texts(cells: &[&str]) -> Self {
        Self {
            cells: cells.iter().map(|c| TableCell::new(*c)).collect(),
        }
    }
}
