//! Shared generation pipeline: validate → build → serialize → emit.

use std::path::Path;

use stackgen_core::ClusterParams;
use stackgen_renderer::{build, serialize};

use crate::{diff_document, write_document, FileDiff, SyncError, WriteResult};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "docker-compose.yml";

/// What to do with the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Overwrite the output file.
    #[default]
    Write,
    /// Render only; leave the filesystem untouched.
    DryRun,
    /// Render and diff against the output file; leave the filesystem untouched.
    Diff,
}

/// What happened to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Write(WriteResult),
    Diff(FileDiff),
}

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The rendered YAML document.
    pub rendered: String,
    pub service_count: usize,
    pub volume_count: usize,
    pub outcome: Outcome,
}

/// Run the pipeline for `params`, emitting to `output` according to `mode`.
///
/// Parameters are validated before anything is built; on any error no file is written.
pub fn run(params: &ClusterParams, output: &Path, mode: Mode) -> Result<RunResult, SyncError> {
    params.validate()?;

    let descriptor = build(params);
    let rendered = serialize(&descriptor)?;
    tracing::debug!(
        services = descriptor.services.len(),
        volumes = descriptor.volumes.len(),
        bytes = rendered.len(),
        "rendered descriptor"
    );

    let outcome = match mode {
        Mode::Write => Outcome::Write(write_document(output, &rendered, false)?),
        Mode::DryRun => Outcome::Write(write_document(output, &rendered, true)?),
        Mode::Diff => Outcome::Diff(diff_document(output, &rendered)?),
    };

    Ok(RunResult {
        rendered,
        service_count: descriptor.services.len(),
        volume_count: descriptor.volumes.len(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use stackgen_core::ParamsError;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn write_mode_creates_file_with_rendered_content() {
        let dir = TempDir::new().expect("dir");
        let out = dir.path().join(DEFAULT_OUTPUT);
        let result = run(&ClusterParams::default(), &out, Mode::Write).expect("run");
        assert!(matches!(result.outcome, Outcome::Write(WriteResult::Created { .. })));
        assert_eq!(fs::read_to_string(&out).unwrap(), result.rendered);
        assert_eq!(result.service_count, 3);
        assert_eq!(result.volume_count, 1);
    }

    #[test]
    fn zero_replicas_is_rejected_before_writing() {
        let dir = TempDir::new().expect("dir");
        let out = dir.path().join(DEFAULT_OUTPUT);
        let params = ClusterParams { replicas: 0, ..Default::default() };
        let err = run(&params, &out, Mode::Write).unwrap_err();
        assert!(matches!(err, SyncError::Params(ParamsError::InvalidReplicas(0))));
        assert!(!out.exists());
    }

    #[test]
    fn dry_run_and_diff_leave_no_file() {
        let dir = TempDir::new().expect("dir");
        let out = dir.path().join(DEFAULT_OUTPUT);
        run(&ClusterParams::default(), &out, Mode::DryRun).expect("dry-run");
        let diff = run(&ClusterParams::default(), &out, Mode::Diff).expect("diff");
        assert!(matches!(diff.outcome, Outcome::Diff(ref d) if !d.is_empty()));
        assert!(!out.exists());
    }

    #[test]
    fn diff_after_write_is_empty() {
        let dir = TempDir::new().expect("dir");
        let out = dir.path().join(DEFAULT_OUTPUT);
        let params = ClusterParams { replicas: 3, ..Default::default() };
        run(&params, &out, Mode::Write).expect("write");
        let result = run(&params, &out, Mode::Diff).expect("diff");
        assert!(matches!(result.outcome, Outcome::Diff(ref d) if d.is_empty()));
    }
}
