//! Error types for term sheet extraction.

use thiserror::Error;

/// Error types that can occur while reading a document or extracting entities.
///
/// A missing field is never an error: absent fields are reported as empty
/// entries in the extraction result. Errors are reserved for unrecoverable
/// input problems (unreadable files, malformed containers), which fail the
/// whole extraction with no partial results.
#[derive(Error, Debug)]
pub enum TermsheetError {
    /// File I/O error.
    ///
    /// Reading the input file failed, e.g. file not found or permission
    /// denied.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed document error.
    ///
    /// The input could not be parsed as a document: not a valid ZIP archive,
    /// missing `word/document.xml`, or malformed XML content.
    #[error("Document parse error: {0}")]
    Parse(String),
}

/// Type alias for [`Result<T, TermsheetError>`].
pub type Result<T> = std::result::Result<T, TermsheetError>;
