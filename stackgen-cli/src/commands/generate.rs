//! `stackgen [flags]` — build the cluster descriptor and write it out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use stackgen_core::{params::ParamOverrides, ClusterParams};
use stackgen_sync::{
    pipeline::{self, Mode, Outcome, RunResult},
    FileDiff, WriteResult, DEFAULT_OUTPUT,
};

/// Generation flags. Unset flags fall back to the `--config` file, then to defaults.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Cassandra and Spark workers number [default: 1]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub replicas: Option<u32>,

    /// CPU limit for Cassandra nodes [default: 1]
    #[arg(long, value_name = "CPU", visible_alias = "cassandra-cpu")]
    pub database_cpu: Option<String>,

    /// Memory limit for Cassandra nodes [default: 1024M]
    #[arg(long, value_name = "MEM", visible_alias = "cassandra-mem")]
    pub database_mem: Option<String>,

    /// CPU limit for the Spark master and workers [default: 1]
    #[arg(long, value_name = "CPU", visible_alias = "spark-cpu")]
    pub worker_cpu: Option<String>,

    /// Memory limit for the Spark master and workers [default: 1024M]
    #[arg(long, value_name = "MEM", visible_alias = "spark-mem")]
    pub worker_mem: Option<String>,

    /// YAML file with any of: replicas, database_cpu, database_mem, worker_cpu, worker_mem.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where to write the compose file. Overwritten without confirmation.
    #[arg(long, short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the generated document to stdout without writing any files.
    #[arg(long, conflicts_with = "diff")]
    pub dry_run: bool,

    /// Show a unified diff against the existing output file without writing it.
    #[arg(long)]
    pub diff: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let mode = self.mode();
        let params = self.resolve_params()?;
        tracing::info!(?params, "resolved parameters");

        let result = pipeline::run(&params, &self.output, mode)
            .with_context(|| format!("failed to generate '{}'", self.output.display()))?;

        report(&result);
        Ok(())
    }

    fn mode(&self) -> Mode {
        if self.dry_run {
            Mode::DryRun
        } else if self.diff {
            Mode::Diff
        } else {
            Mode::Write
        }
    }

    /// Defaults, then the parameter file if given, then explicit flags.
    fn resolve_params(&self) -> Result<ClusterParams> {
        let base = match &self.config {
            Some(path) => ClusterParams::load_at(path)
                .with_context(|| format!("cannot load parameters from '{}'", path.display()))?,
            None => ClusterParams::default(),
        };
        Ok(self.overrides().apply(base))
    }

    fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            replicas: self.replicas,
            database_cpu: self.database_cpu.clone(),
            database_mem: self.database_mem.clone(),
            worker_cpu: self.worker_cpu.clone(),
            worker_mem: self.worker_mem.clone(),
        }
    }
}

fn report(result: &RunResult) {
    let counts = format!(
        "{} services, {} volumes",
        result.service_count, result.volume_count
    );
    match &result.outcome {
        Outcome::Write(WriteResult::WouldWrite { path }) => {
            print!("{}", result.rendered);
            eprintln!("[dry-run] would write {} ({counts})", path.display());
        }
        Outcome::Write(WriteResult::Created { path, .. }) => {
            println!("✓ Wrote {} ({counts})", path.display());
        }
        Outcome::Write(WriteResult::Overwritten { path, changed, .. }) => {
            let note = if *changed { "" } else { ", content unchanged" };
            println!("✓ Overwrote {} ({counts}{note})", path.display());
        }
        Outcome::Diff(diff) => print_diff(diff),
    }
}

fn print_diff(diff: &FileDiff) {
    if diff.is_empty() {
        println!("No differences for '{}'.", diff.path.display());
        return;
    }
    for line in diff.unified_diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}
