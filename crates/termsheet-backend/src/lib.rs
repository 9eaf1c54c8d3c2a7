//! # Termsheet Backend - DOCX reading and extraction entry point
//!
//! Reads `.docx` term sheets into the paragraph/table shape of
//! `termsheet-core` and exposes [`Extractor`], the one-call path from a file
//! to the `{lines, entities}` extraction result.
//!
//! ```rust,ignore
//! use termsheet_backend::Extractor;
//!
//! let extraction = Extractor::new().extract_file("term_sheet.docx")?;
//! println!("{:?}", extraction.entities.get("Notional"));
//! ```

pub mod docx;
pub mod extractor;
pub mod traits;

pub use docx::DocxReader;
pub use extractor::Extractor;
pub use traits::DocumentReader;
