//! Atomic file writes
//!
//! Content goes to a temporary file next to the destination and is then
//! renamed over it, so an interrupted run never leaves a truncated copy.

use crate::error::{MirrorError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `contents` to `destination` atomically
///
/// The destination's parent directory must already exist. An existing
/// file at `destination` is replaced. When `permissions_from` is given,
/// that file's permissions are applied to the new file.
pub fn write_atomic(
    destination: &Path,
    contents: &[u8],
    permissions_from: Option<&Path>,
) -> Result<u64> {
    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| MirrorError::io(parent, e))?;
    if let Err(e) = temp_file.write_all(contents).and_then(|_| temp_file.flush()) {
        return Err(MirrorError::io(temp_file.path(), e));
    }

    if let Some(source) = permissions_from {
        let permissions = fs::metadata(source)
            .map_err(|e| MirrorError::io(source, e))?
            .permissions();
        fs::set_permissions(temp_file.path(), permissions)
            .map_err(|e| MirrorError::io(temp_file.path(), e))?;
    }

    temp_file
        .persist(destination)
        .map_err(|source| MirrorError::Persist {
            path: destination.to_path_buf(),
            source,
        })?;

    Ok(contents.len() as u64)
}
