//! Atomic writer.
//!
//! ## `write_document` — write protocol
//!
//! 1. Normalise line endings to LF.
//! 2. SHA-256 hash the new content, and the previous file if one exists.
//! 3. Write to `<path>.stackgen.tmp` in the target's directory.
//! 4. Rename onto the final path (atomic on POSIX).
//!
//! If step 3 or 4 fails the tmp file is removed and any previous file is left untouched.
//!
//! The target is always overwritten, even when its content is unchanged.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of writing a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// No file existed at the path before.
    Created { path: PathBuf, digest: String },
    /// An existing file was replaced. `changed` is false when the old content was identical.
    Overwritten {
        path: PathBuf,
        digest: String,
        changed: bool,
    },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Created { path, .. }
            | WriteResult::Overwritten { path, .. }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// write_document
// ---------------------------------------------------------------------------

/// Write `content` to `path`, replacing any existing file.
pub fn write_document(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, SyncError> {
    let tmp = tmp_path(path);
    write_document_with_tmp(path, content, dry_run, &tmp)
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.stackgen.tmp", path.display()))
}

fn write_document_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, SyncError> {
    let normalized = normalize_line_endings(content);
    let content = normalized.as_str();

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    let digest = sha256_hex(content.as_bytes());
    let previous = match std::fs::read(path) {
        Ok(bytes) => Some(sha256_hex(&bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => return Err(io_err(path, err)),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Err(e) = std::fs::write(tmp, content) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(tmp, e));
    }

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {} (sha256 {})", path.display(), &digest[..12]);
    let path = path.to_path_buf();
    Ok(match previous {
        None => WriteResult::Created { path, digest },
        Some(old) => WriteResult::Overwritten {
            changed: old != digest,
            path,
            digest,
        },
    })
}

pub(crate) fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
