//! # m2repo-cli — Local Repository Query Tool
//!
//! Provides the `m2repo` command-line interface over `m2repo-core`.
//!
//! ## Subcommands
//!
//! - `m2repo group <GROUP_ID>` — group directory chain present?
//! - `m2repo artifact <GROUP_ID> <ARTIFACT_ID>` — artifact present?
//! - `m2repo version <GROUP_ID> <ARTIFACT_ID> <VERSION>` — complete version present?
//! - `m2repo artifacts <GROUP_ID>` — artifacts with a complete version.
//! - `m2repo versions <GROUP_ID> <ARTIFACT_ID>` — complete versions.
//! - `m2repo check <GROUP:ARTIFACT[:VERSION]>` — coordinate shorthand.
//!
//! ## Exit Codes
//!
//! `0` found, `1` not found (or empty listing), `2` error.
//!
//! ## Crate Policy
//!
//! - Argument parsing and output live here; every decision is made in
//!   `m2repo-core`.
//! - Diagnostics go to stderr through `tracing`; stdout carries results.

pub mod query;
pub mod report;

use std::path::Path;

use anyhow::{Context, Result};
use m2repo_core::RepositoryConfig;

/// Exit code for a query that found what it asked for.
pub const EXIT_FOUND: u8 = 0;
/// Exit code for a query that found nothing.
pub const EXIT_NOT_FOUND: u8 = 1;
/// Exit code for an I/O, validation, or configuration failure.
pub const EXIT_ERROR: u8 = 2;

/// Resolve the repository configuration.
///
/// An explicit `--repository` wins over a `--config` file, which wins over
/// the `~/.m2/repository` default.
pub fn resolve_config(repository: Option<&Path>, config: Option<&Path>) -> Result<RepositoryConfig> {
    if let Some(root) = repository {
        return Ok(RepositoryConfig::new(root));
    }
    if let Some(file) = config {
        return RepositoryConfig::load(file)
            .with_context(|| format!("failed to load configuration: {}", file.display()));
    }
    RepositoryConfig::from_home().context("failed to resolve the default repository root")
}
