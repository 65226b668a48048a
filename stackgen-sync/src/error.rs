//! Error types for stackgen-sync.

use std::path::PathBuf;

use thiserror::Error;

use stackgen_core::ParamsError;
use stackgen_renderer::RenderError;

/// All errors that can arise while generating and writing a descriptor.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Parameters failed validation.
    #[error("invalid parameters: {0}")]
    Params(#[from] ParamsError),

    /// An error from the renderer.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
