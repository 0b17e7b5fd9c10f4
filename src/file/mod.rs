//! File collaborator
//! Loading the edited file and writing the buffer back out

use crate::error::{EditError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Read the whole file at `path`
///
/// A missing file is not an error: it is a new file and yields `None`.
pub fn load(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => {
            info!(path = %path.display(), len = bytes.len(), "loaded file");
            Ok(Some(bytes))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "new file");
            Ok(None)
        }
        Err(err) => Err(EditError::io(path, err)),
    }
}

/// Write `before` then `after` to `path`, replacing the old contents
///
/// The bytes go to a temporary file in the same directory, which is then
/// renamed over the target. On failure the temporary file is removed.
pub fn save(path: &Path, before: &[u8], after: &[u8]) -> Result<()> {
    write_atomic(path, before, after).map_err(|err| EditError::io(path, err))?;
    info!(
        path = %path.display(),
        len = before.len() + after.len(),
        "saved file"
    );
    Ok(())
}

fn write_atomic(path: &Path, before: &[u8], after: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent)?;
    if let Ok(meta) = fs::metadata(path) {
        file.as_file().set_permissions(meta.permissions())?;
    }
    file.write_all(before)?;
    file.write_all(after)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
