//! Unified diff between the file on disk and a freshly rendered document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::error::{io_err, SyncError};
use crate::writer::normalize_line_endings;

/// A single rendered file diff. `unified_diff` is empty when nothing would change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

impl FileDiff {
    pub fn is_empty(&self) -> bool {
        self.unified_diff.is_empty()
    }
}

/// Compare `rendered` against the current content of `path` (empty if absent).
///
/// No files are written.
pub fn diff_document(path: &Path, rendered: &str) -> Result<FileDiff, SyncError> {
    let rendered = normalize_line_endings(rendered);
    let existing = read_existing_or_empty(path)?;
    if existing == rendered {
        return Ok(FileDiff {
            path: path.to_path_buf(),
            unified_diff: String::new(),
        });
    }

    let old_header = format!("a/{}", path.display());
    let new_header = format!("b/{}", path.display());
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(FileDiff {
        path: path.to_path_buf(),
        unified_diff: unified,
    })
}

fn read_existing_or_empty(path: &Path) -> Result<String, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(normalize_line_endings(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}
