use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::item::TodoItem;
use crate::parse::{ParsedLine, parse_checklist, serialize_checklist};

/// Error type for checklist file I/O
#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl ChecklistError {
    /// Whether this error means the file simply doesn't exist yet
    pub fn is_not_found(&self) -> bool {
        match self {
            ChecklistError::Read { source, .. } | ChecklistError::Write { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ChecklistError::Read { path, .. } | ChecklistError::Write { path, .. } => path,
        }
    }
}

/// Read and parse a checklist file. Invalid UTF-8 is reported as a read
/// error with kind `InvalidData`.
pub fn read_checklist(path: &Path) -> Result<Vec<ParsedLine>, ChecklistError> {
    let text = fs::read_to_string(path).map_err(|e| ChecklistError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_checklist(&text))
}

/// Serialize and write a checklist file, replacing any existing content.
pub fn write_checklist(path: &Path, header: &str, items: &[TodoItem]) -> Result<(), ChecklistError> {
    let content = serialize_checklist(header, items);
    atomic_write(path, content.as_bytes()).map_err(|e| ChecklistError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path` atomically using a temp file + rename.
///
/// A symlinked `path` is resolved so the link's target gets the new
/// content, and an existing file keeps its permissions.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(e),
    };
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
