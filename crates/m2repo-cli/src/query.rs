//! # Query Subcommands
//!
//! One subcommand per repository query. Each runs against a
//! [`LocalRepository`] and produces a [`Report`].

use anyhow::{Context, Result};
use clap::Subcommand;

use m2repo_core::{Coordinate, DirectoryProber, LocalRepository};

use crate::report::Report;

/// Repository queries.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Check that every segment of a group id exists as a directory.
    Group {
        /// Dotted group id, e.g. `org.apache.maven.plugins`.
        group_id: String,
    },

    /// Check that an artifact exists with at least one complete version.
    Artifact {
        /// Dotted group id.
        group_id: String,
        /// Artifact id.
        artifact_id: String,
    },

    /// Check that a version exists and is completely downloaded.
    Version {
        /// Dotted group id.
        group_id: String,
        /// Artifact id.
        artifact_id: String,
        /// Version directory name.
        version: String,
    },

    /// List the artifacts of a group that have a complete version.
    Artifacts {
        /// Dotted group id.
        group_id: String,
    },

    /// List the complete versions of an artifact.
    Versions {
        /// Dotted group id.
        group_id: String,
        /// Artifact id.
        artifact_id: String,
    },

    /// Check a `group:artifact[:version]` coordinate.
    Check {
        /// Coordinate, e.g. `junit:junit:4.13.2`.
        coordinate: String,
    },
}

/// Execute a query against the repository.
pub fn run_query<P: DirectoryProber>(
    command: &QueryCommand,
    repo: &LocalRepository<P>,
) -> Result<Report> {
    tracing::debug!(root = %repo.layout().root().display(), ?command, "running query");

    let report = match command {
        QueryCommand::Group { group_id } => {
            let missing_segment = repo
                .first_missing_segment(group_id)
                .with_context(|| format!("group query failed for {group_id}"))?;
            Report::Group {
                group: group_id.clone(),
                found: missing_segment.is_none(),
                missing_segment,
            }
        }
        QueryCommand::Artifact {
            group_id,
            artifact_id,
        } => artifact_report(repo, group_id, artifact_id)?,
        QueryCommand::Version {
            group_id,
            artifact_id,
            version,
        } => version_report(repo, group_id, artifact_id, version)?,
        QueryCommand::Artifacts { group_id } => Report::Artifacts {
            group: group_id.clone(),
            artifacts: repo
                .artifacts_of_group(group_id)
                .with_context(|| format!("failed to list artifacts of {group_id}"))?,
        },
        QueryCommand::Versions {
            group_id,
            artifact_id,
        } => Report::Versions {
            group: group_id.clone(),
            artifact: artifact_id.clone(),
            versions: repo
                .artifact_versions(group_id, artifact_id)
                .with_context(|| format!("failed to list versions of {group_id}:{artifact_id}"))?,
        },
        QueryCommand::Check { coordinate } => {
            let coordinate = Coordinate::parse(coordinate)?;
            let group = coordinate.group.as_str();
            match &coordinate.version {
                Some(version) => version_report(repo, group, &coordinate.artifact, version)?,
                None => artifact_report(repo, group, &coordinate.artifact)?,
            }
        }
    };

    tracing::info!(found = report.found(), "query complete");
    Ok(report)
}

fn artifact_report<P: DirectoryProber>(
    repo: &LocalRepository<P>,
    group: &str,
    artifact: &str,
) -> Result<Report> {
    let found = repo
        .artifact_exists(group, artifact)
        .with_context(|| format!("artifact query failed for {group}:{artifact}"))?;
    Ok(Report::Artifact {
        group: group.to_owned(),
        artifact: artifact.to_owned(),
        found,
    })
}

fn version_report<P: DirectoryProber>(
    repo: &LocalRepository<P>,
    group: &str,
    artifact: &str,
    version: &str,
) -> Result<Report> {
    let found = repo
        .version_exists(group, artifact, version)
        .with_context(|| format!("version query failed for {group}:{artifact}:{version}"))?;
    Ok(Report::Version {
        group: group.to_owned(),
        artifact: artifact.to_owned(),
        version: version.to_owned(),
        found,
    })
}
