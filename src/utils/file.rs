//! Target-file I/O: whole-file read, atomic overwrite, and backup copies.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::PatchError;

/// Loads the full target file into memory as a single string.
pub fn read_source(path: &Path) -> Result<String, PatchError> {
    fs::read_to_string(path).map_err(|source| PatchError::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrites `path` with `content` via a temp file in the same directory,
/// so a failed write never leaves a truncated target behind.
pub fn write_source(path: &Path, content: &str) -> Result<(), PatchError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let write_err = |source| PatchError::WriteSource {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Copies `path` to `<path>.bak` and returns the backup path.
pub fn backup(path: &Path) -> Result<PathBuf, PatchError> {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    let bak = PathBuf::from(name);
    fs::copy(path, &bak).map_err(|source| PatchError::WriteSource {
        path: bak.clone(),
        source,
    })?;
    Ok(bak)
}
