//! # m2repo CLI entry point
//!
//! Parses command-line arguments, resolves the repository root, and runs a
//! single query against it.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use m2repo_cli::query::{run_query, QueryCommand};
use m2repo_cli::report::OutputFormat;
use m2repo_cli::{resolve_config, EXIT_ERROR};
use m2repo_core::LocalRepository;

/// Query a local Maven repository.
///
/// Reports whether groups, artifacts, and versions are present, treating a
/// version with unfinished `.lastUpdated` transfers as absent.
#[derive(Parser, Debug)]
#[command(name = "m2repo", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Repository root. Defaults to ~/.m2/repository.
    #[arg(long, global = true, value_name = "DIR")]
    repository: Option<PathBuf>,

    /// YAML configuration file with a `root` entry.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: QueryCommand,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let config = resolve_config(cli.repository.as_deref(), cli.config.as_deref())?;
    tracing::debug!(root = %config.root().display(), "resolved repository root");

    let repo = LocalRepository::open(&config);
    let report = run_query(&cli.command, &repo)?;

    let mut stdout = std::io::stdout().lock();
    report
        .render(cli.format, &mut stdout)
        .and_then(|()| stdout.flush())
        .context("failed to write report")?;

    Ok(report.exit_code())
}
