//! Extraction façade: document in, lines plus entities out.

use crate::document::RawDocument;
use crate::line::{build_lines, Line};
use crate::resolver::{resolve_entities, EntityMap};
use serde::Serialize;

/// Result of one extraction: the flattened line stream (useful for display
/// and debugging) and the resolved entity mapping. Serializes directly to the
/// response body shape `{lines, entities}`.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    /// Flattened document lines in order; pairs render as `"label\tvalue"`.
    pub lines: Vec<Line>,
    /// Canonical field name → value (or null), plus debug party keys.
    pub entities: EntityMap,
}

/// Extract entities from a parsed document.
///
/// Stateless composition of the line builder and the field resolver; the only
/// shared state is the static schema and pattern tables, so concurrent calls
/// over independent documents are safe.
#[must_use]
pub fn extract_document(document: &RawDocument) -> Extraction {
    let lines = build_lines(document);
    let entities = resolve_entities(&lines);
    Extraction { lines, entities }
}
