//! In-memory PDF document owned by a session.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::geom::PageSize;

/// Error raised by a page index beyond the current document.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
#[error("page index {index} out of range for document of {page_count} pages")]
pub struct PageIndexError {
    pub index: usize,
    pub page_count: usize,
}

/// A loaded PDF: the raw file bytes plus the page sizes read from them at
/// load time. Immutable once loaded.
#[derive(Debug)]
pub struct Document {
    bytes: Vec<u8>,
    pages: Vec<PageSize>,
}

impl Document {
    pub fn new(bytes: Vec<u8>, pages: Vec<PageSize>) -> Self {
        Self { bytes, pages }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_size(&self, index: usize) -> Result<&PageSize, PageIndexError> {
        self.pages.get(index).ok_or(PageIndexError {
            index,
            page_count: self.pages.len(),
        })
    }

    /// Writes the document to a temporary file, for engines that read a PDF
    /// from a path rather than from memory. The file is removed when the
    /// returned value drops, whether or not the caller's work succeeded.
    pub fn materialise(&self) -> Result<DocumentFile> {
        let mut file =
            tempfile::NamedTempFile::new().with_context(|| "creating temporary PDF file")?;
        file.write_all(&self.bytes)
            .with_context(|| "writing temporary PDF file")?;
        file.flush().with_context(|| "flushing temporary PDF file")?;
        Ok(DocumentFile { file })
    }
}

/// Scoped on-disk copy of a [Document].
#[derive(Debug)]
pub struct DocumentFile {
    file: tempfile::NamedTempFile,
}

impl DocumentFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
