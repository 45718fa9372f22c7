//! In-memory ZIP archive assembly.
//!
//! Accumulates named binary entries and finalizes them into a single
//! deflate-compressed byte stream. One builder is owned by one batch
//! invocation; it is only ever mutated after a chunk's renders have all
//! settled, so it needs no internal synchronization.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error_handling::ArchiveError;

/// Builds one downloadable ZIP archive from rendered documents.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    entry_count: usize,
}

impl ArchiveBuilder {
    /// Creates an empty builder backed by an in-memory buffer.
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            entry_count: 0,
        }
    }

    /// Adds one named document to the archive.
    ///
    /// Duplicate names are not rejected here; the processor's entry naming
    /// rule is responsible for keeping names distinct.
    pub fn add_entry(&mut self, name: &str, data: &[u8]) -> Result<(), ArchiveError> {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.writer
            .start_file(name, options)
            .map_err(|source| ArchiveError::Entry {
                name: name.to_owned(),
                source,
            })?;
        self.writer
            .write_all(data)
            .map_err(|source| ArchiveError::EntryWrite {
                name: name.to_owned(),
                source,
            })?;
        self.entry_count += 1;
        Ok(())
    }

    /// Number of entries added so far.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Writes the central directory and returns the complete archive bytes.
    pub fn finalize(mut self) -> Result<Vec<u8>, ArchiveError> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use zip::ZipArchive;

    use super::*;

    #[test]
    fn finalized_archive_contains_added_entries() {
        let mut builder = ArchiveBuilder::new();
        builder
            .add_entry("certificate_amina_MATH-2026.pdf", b"first document")
            .expect("add first entry");
        builder
            .add_entry("certificate_kofi_MATH-2026.pdf", b"second document")
            .expect("add second entry");
        assert_eq!(builder.entry_count(), 2);

        let bytes = builder.finalize().expect("finalize archive");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("readable archive");
        assert_eq!(archive.len(), 2);

        let mut contents = String::new();
        archive
            .by_name("certificate_amina_MATH-2026.pdf")
            .expect("entry present")
            .read_to_string(&mut contents)
            .expect("entry readable");
        assert_eq!(contents, "first document");
    }

    #[test]
    fn empty_builder_finalizes_to_a_valid_empty_container() {
        // The processor never finalizes a zero-success batch, but the builder
        // itself must not corrupt the stream if it happens to be empty.
        let bytes = ArchiveBuilder::new().finalize().expect("finalize");
        let archive = ZipArchive::new(Cursor::new(bytes)).expect("readable archive");
        assert_eq!(archive.len(), 0);
    }
}
