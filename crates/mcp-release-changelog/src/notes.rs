//! Release notes file

use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use tracing::debug;

use mcp_release_core::error::ChangelogError;

/// Read the notes produced by a changelog split
pub fn read_release_notes(path: &Path) -> Result<String, ChangelogError> {
    let notes = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        IoErrorKind::NotFound => ChangelogError::NotesNotFound(path.to_path_buf()),
        _ => ChangelogError::Io(e),
    })?;
    debug!(path = %path.display(), bytes = notes.len(), "read release notes");
    Ok(notes)
}
