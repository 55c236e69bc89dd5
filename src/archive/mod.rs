//! In-memory ZIP assembly for the combined download.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::utils::{WorkbenchError, WorkbenchResult};

/// Accumulates named byte buffers into one deflate-compressed ZIP buffer.
///
/// Entries are stored losslessly and must have unique names: a collision
/// fails with `DuplicateEntry` rather than silently overwriting. After
/// `finalize` the archive is closed and further calls fail with
/// `ArchiveClosed`.
pub struct ArchiveBuilder {
    writer: Option<ZipWriter<Cursor<Vec<u8>>>>,
    entry_names: HashSet<String>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: Some(ZipWriter::new(Cursor::new(Vec::new()))),
            entry_names: HashSet::new(),
        }
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entry_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_names.is_empty()
    }

    /// Adds one named entry to the archive.
    pub fn add_entry(&mut self, name: &str, bytes: &[u8]) -> WorkbenchResult<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            WorkbenchError::ArchiveClosed(format!(
                "Cannot add {} to a finalized archive", name
            ))
        })?;

        if !self.entry_names.insert(name.to_string()) {
            return Err(WorkbenchError::DuplicateEntry(name.to_string()));
        }

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated);
        writer.start_file(name, options).map_err(|e| {
            WorkbenchError::processing(format!("Failed to start archive entry {}: {}", name, e))
        })?;
        writer.write_all(bytes)?;
        debug!("Added archive entry: {} ({} bytes)", name, bytes.len());
        Ok(())
    }

    /// Closes the ZIP stream and returns the archive buffer.
    ///
    /// Must be called once, after all expected entries have been added.
    pub fn finalize(&mut self) -> WorkbenchResult<Vec<u8>> {
        let writer = self.writer.take().ok_or_else(|| {
            WorkbenchError::ArchiveClosed("Archive was already finalized".to_string())
        })?;
        let cursor = writer.finish().map_err(|e| {
            WorkbenchError::processing(format!("Failed to finalize archive: {}", e))
        })?;
        debug!("Finalized archive with {} entries", self.entry_names.len());
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
