//! # stackgen-sync
//!
//! Atomic writer, dry-run and diff support for generated compose files.
//!
//! Call [`pipeline::run`] to build, render and emit a descriptor in one step,
//! or [`write_document`] / [`diff_document`] to handle already-rendered text.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_document, FileDiff};
pub use error::SyncError;
pub use pipeline::{Mode, Outcome, RunResult, DEFAULT_OUTPUT};
pub use writer::{write_document, WriteResult};
