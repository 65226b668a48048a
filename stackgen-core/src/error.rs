//! Error types for stackgen-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while resolving cluster parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// Underlying I/O failure reading a parameter file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse parameter file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The parameter file did not exist at the given path.
    #[error("parameter file not found at {path}")]
    NotFound { path: PathBuf },

    /// A cluster needs at least one database node and one worker.
    #[error("invalid replica count {0}: at least 1 replica is required")]
    InvalidReplicas(u32),
}
