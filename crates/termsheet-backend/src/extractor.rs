//! Path-level extraction entry point.
//!
//! This is the operation a surrounding upload handler consumes: give it a
//! file path (or the uploaded bytes), get back the `{lines, entities}`
//! extraction or a single failure.

use crate::docx::DocxReader;
use crate::traits::DocumentReader;
use log::debug;
use std::path::Path;
use termsheet_core::{extract_document, Extraction, Result};

/// Composes the DOCX reader with the core extraction engine.
///
/// Stateless and cheap to construct; one instance may serve concurrent
/// extractions of independent documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    reader: DocxReader,
}

impl Extractor {
    /// Create a new extractor.
    #[inline]
    #[must_use = "creates an extractor that should be used for extraction"]
    pub const fn new() -> Self {
        Self {
            reader: DocxReader::new(),
        }
    }

    /// Extract entities from a `.docx` file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid DOCX
    /// document. A document that parses but contains no recognizable fields
    /// is not an error; its entities are simply absent.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let path = path.as_ref();
        debug!("extracting entities from {}", path.display());
        let document = self.reader.read_file(path)?;
        Ok(extract_document(&document))
    }

    /// Extract entities from in-memory DOCX bytes.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a valid DOCX document.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<Extraction> {
        let document = self.reader.read_bytes(data)?;
        Ok(extract_document(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termsheet_core::TermsheetError;

    #[test]
    fn test_extract_bytes_rejects_garbage() {
        let result = Extractor::new().extract_bytes(b"not a document");
        assert!(matches!(result, Err(TermsheetError::Parse(_))));
    }

    #[test]
    fn test_extract_file_missing_path() {
        let result = Extractor::new().extract_file("/nonexistent/sheet.docx");
        assert!(matches!(result, Err(TermsheetError::Io(_))));
    }
}
