//! YAML rendering of a [`Descriptor`].
//!
//! Output is deterministic: mappings are emitted in insertion order (the
//! descriptor holds them in `IndexMap`s), sequences in element order, and strings
//! that would otherwise read back as numbers or booleans (`'3'`, `'1'`) are
//! quoted by serde_yaml.

use stackgen_core::Descriptor;

use crate::error::RenderError;

/// Render `descriptor` as a YAML document. The result always ends with a newline.
pub fn serialize(descriptor: &Descriptor) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(descriptor)?)
}

/// Parse a YAML document produced by [`serialize`] (or written by hand) back into a descriptor.
pub fn parse(yaml: &str) -> Result<Descriptor, RenderError> {
    Ok(serde_yaml::from_str(yaml)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
