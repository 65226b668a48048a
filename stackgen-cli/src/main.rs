//! stackgen — compose file generator for a Cassandra + Spark cluster.
//!
//! # Usage
//!
//! ```text
//! stackgen [--replicas N] [--database-cpu CPU] [--database-mem MEM]
//!          [--worker-cpu CPU] [--worker-mem MEM]
//!          [--config FILE] [--output PATH] [--dry-run | --diff] [-v...]
//! ```

mod commands;

use anyhow::Result;
use clap::Parser;

use commands::generate::GenerateArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "stackgen",
    version,
    about = "Generate a docker-compose file for Cassandra and Spark clusters",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.generate.run()
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
