//! Atomic file writer.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::StorageError;

/// Writes `content` to `path` atomically.
///
/// The bytes go to a temporary file in the same directory which is then
/// renamed over `path`, so readers see either the old or the new document.
/// Missing parent directories are created.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;
    Ok(())
}
