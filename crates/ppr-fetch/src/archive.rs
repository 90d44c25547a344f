//! Zip extraction for the bulk register download.

use std::io::{Cursor, Read};
use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;

/// Upper bound on the up-front allocation for an entry.
const MAX_SIZE_HINT: usize = 64 * 1024 * 1024;

/// Errors that can occur while opening the bulk archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The bytes are not a readable zip archive.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive holds no entries.
    #[error("Archive contains no files")]
    Empty,

    /// Reading the entry failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns the uncompressed contents of the first entry in a zip archive.
///
/// The bulk register archive holds exactly one CSV; any further entries
/// are ignored.
///
/// # Errors
///
/// Returns an error if the archive cannot be read or is empty.
pub fn extract_first_entry(bytes: &[u8]) -> Result<Vec<u8>, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    if archive.is_empty() {
        return Err(ArchiveError::Empty);
    }

    let mut entry = archive.by_index(0)?;
    debug!(name = entry.name(), size = entry.size(), "extracting archive entry");

    let mut contents = Vec::with_capacity(size_hint(entry.size()));
    entry.read_to_end(&mut contents)?;
    Ok(contents)
}

/// Capacity to reserve for an entry whose header declares `declared` bytes.
///
/// The header is untrusted, so the reservation never exceeds
/// [`MAX_SIZE_HINT`]; `read_to_end` grows the buffer past it if needed.
fn size_hint(declared: u64) -> usize {
    usize::try_from(declared).map_or(MAX_SIZE_HINT, |size| size.min(MAX_SIZE_HINT))
}
