//! Error types for stackgen-renderer.

use thiserror::Error;

/// All errors that can arise while rendering or re-reading a descriptor.
#[derive(Debug, Error)]
pub enum RenderError {
    /// YAML emitter or parser error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
