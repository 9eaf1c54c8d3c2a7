//! Document flattening: paragraphs and table rows to an ordered line stream.
//!
//! Every downstream decision (label matching, lookahead, the whole-document
//! fallback) operates on this flat sequence, so line order must follow
//! document order exactly.

use crate::document::RawDocument;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// One unit of the flattened text stream.
///
/// Either a plain text line (paragraph fragment or lone table cell) or a
/// label/value pair derived from two adjacent cells in a table row. A pair
/// renders as `"label\tvalue"`; the resolver splits on the tab to recover the
/// two sides. Lines are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Plain text line.
    Text(String),
    /// Adjacent-cell pair from a table row.
    Pair { label: String, value: String },
}

impl Line {
    /// Render the line as flat text; pairs are joined with a tab.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Pair { label, value } => Cow::Owned(format!("{label}\t{value}")),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

// Lines go out in the response body as plain strings, tab and all.
impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_text())
    }
}

/// Flatten a document into its ordered line sequence.
///
/// Paragraphs are split on internal line breaks and trimmed; empty fragments
/// are dropped. Table rows keep their non-empty cells in order: two or more
/// cells pair up consecutively (0-1, 2-3, ...) with a lone trailing cell
/// emitted on its own, a single surviving cell becomes a plain line, and rows
/// with no text are skipped.
#[must_use]
pub fn build_lines(document: &RawDocument) -> Vec<Line> {
    let mut lines = Vec::new();

    for paragraph in &document.paragraphs {
        for fragment in paragraph.text.lines() {
            let fragment = fragment.trim();
            if !fragment.is_empty() {
                lines.push(Line::Text(fragment.to_string()));
            }
        }
    }

    for table in &document.tables {
        for row in &table.rows {
            let cells: Vec<&str> = row
                .cells
                .iter()
                .map(|cell| cell.text.trim())
                .filter(|text| !text.is_empty())
                .collect();

            if cells.len() < 2 {
                if let Some(cell) = cells.first() {
                    lines.push(Line::Text((*cell).to_string()));
                }
                continue;
            }

            for pair in cells.chunks(2) {
                if let [label, value] = pair {
                    lines.push(Line::Pair {
                        label: (*label).to_string(),
                        value: (*value).to_string(),
                    });
                } else {
                    // odd trailing cell has no partner
                    lines.push(Line::Text(pair[0].to_string()));
                }
            }
        }
    }

    lines
}

/// Index of the first non-blank line after `start`, if any.
#[must_use]
pub fn next_non_empty(texts: &[String], start: usize) -> Option<usize> {
    let mut j = start + 1;
    while j < texts.len() && texts[j].trim().is_empty() {
        j += 1;
    }
    (j < texts.len()).then_some(j)
}
