//! Core trait definition for document readers.

use std::path::Path;
use termsheet_core::{RawDocument, Result};

/// A document reader: turns container bytes into the paragraph/table shape
/// the extraction engine consumes.
///
/// Readers are stateless; the same reader may serve concurrent extractions.
pub trait DocumentReader: Send + Sync {
    /// Parse a document from bytes.
    ///
    /// # Errors
    /// Returns an error if the container or its content cannot be parsed.
    fn read_bytes(&self, data: &[u8]) -> Result<RawDocument>;

    /// Parse a document from a file path.
    ///
    /// # Errors
    /// Returns an error if file reading or parsing fails.
    fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<RawDocument> {
        let data = std::fs::read(path.as_ref())?;
        self.read_bytes(&data)
    }
}
