//! # Termsheet Core - term sheet entity extraction engine
//!
//! Extracts structured financial-contract entities (Counterparty, Notional,
//! dates, Coupon, Barrier, ...) from semi-structured documents. A document
//! reader (see the `termsheet-backend` crate) supplies a [`RawDocument`] of
//! paragraphs and tables; this crate flattens it into an ordered line stream
//! and resolves a fixed schema of named fields from those lines.
//!
//! Resolution is a layered strategy evaluated short-circuit per field:
//!
//! 1. **Tabular pairing** - label and value in adjacent table cells
//! 2. **Inline separator** - `Maturity: 12 March 2030`
//! 3. **Label + lookahead** - label-only line, value on the next line
//! 4. **Whole-document regex fallback** - only when nothing at all was found
//!
//! ## Quick start
//!
//! ```rust
//! use termsheet_core::{extract_document, Paragraph, RawDocument};
//!
//! let document = RawDocument {
//!     paragraphs: vec![Paragraph::new("Maturity: 12 March 2030")],
//!     tables: vec![],
//! };
//! let extraction = extract_document(&document);
//! assert_eq!(
//!     extraction.entities.get("Maturity").unwrap().as_deref(),
//!     Some("12 March 2030")
//! );
//! ```

pub mod document;
pub mod error;
pub mod extract;
pub mod line;
pub mod normalize;
pub mod resolver;
pub mod schema;

pub use document::{Paragraph, RawDocument, Table, TableCell, TableRow};
pub use error::{Result, TermsheetError};
pub use extract::{extract_document, Extraction};
pub use line::{build_lines, next_non_empty, Line};
pub use normalize::normalize_candidate;
pub use resolver::{resolve_entities, EntityMap, PARTY_A_KEY, PARTY_B_KEY};
pub use schema::{FieldSpec, ENTITY_FIELDS};
