//! # stackgen-renderer
//!
//! Builds the compose [`Descriptor`](stackgen_core::Descriptor) for a database +
//! compute cluster and renders it as YAML.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stackgen_core::ClusterParams;
//! use stackgen_renderer::{build, serialize};
//!
//! fn render(params: &ClusterParams) {
//!     let descriptor = build(params);
//!     if let Ok(yaml) = serialize(&descriptor) {
//!         println!("{yaml}");
//!     }
//! }
//! ```

pub mod builder;
pub mod error;
pub mod serializer;
pub mod topology;

pub use builder::build;
pub use error::RenderError;
pub use serializer::{parse, serialize};
