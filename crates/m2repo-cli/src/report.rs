//! # Query Reports
//!
//! The result of one query, rendered either as console text or as a JSON
//! object on a single line.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::{EXIT_FOUND, EXIT_NOT_FOUND};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console lines.
    #[default]
    Text,
    /// One JSON object per query.
    Json,
}

/// Outcome of a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Report {
    /// Group directory chain lookup.
    Group {
        /// Dotted group id as queried.
        group: String,
        /// Whether every segment resolved to a directory.
        found: bool,
        /// First segment with no directory, when not found.
        missing_segment: Option<String>,
    },
    /// Artifact lookup.
    Artifact {
        /// Dotted group id.
        group: String,
        /// Artifact id.
        artifact: String,
        /// Whether the artifact has a complete version.
        found: bool,
    },
    /// Version lookup.
    Version {
        /// Dotted group id.
        group: String,
        /// Artifact id.
        artifact: String,
        /// Version directory name.
        version: String,
        /// Whether the version is completely downloaded.
        found: bool,
    },
    /// Artifacts of a group.
    Artifacts {
        /// Dotted group id.
        group: String,
        /// Artifact ids with a complete version, sorted.
        artifacts: Vec<String>,
    },
    /// Versions of an artifact.
    Versions {
        /// Dotted group id.
        group: String,
        /// Artifact id.
        artifact: String,
        /// Complete versions, sorted.
        versions: Vec<String>,
    },
}

impl Report {
    /// Whether the query found anything.
    pub fn found(&self) -> bool {
        match self {
            Self::Group { found, .. } | Self::Artifact { found, .. } | Self::Version { found, .. } => {
                *found
            }
            Self::Artifacts { artifacts, .. } => !artifacts.is_empty(),
            Self::Versions { versions, .. } => !versions.is_empty(),
        }
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> u8 {
        if self.found() {
            EXIT_FOUND
        } else {
            EXIT_NOT_FOUND
        }
    }

    /// Write the report in the requested format.
    pub fn render(&self, format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.render_text(out),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
        }
    }

    fn render_text(&self, out: &mut impl Write) -> io::Result<()> {
        let verdict = |found: bool| if found { "found" } else { "not found" };
        match self {
            Self::Group {
                group,
                found,
                missing_segment,
            } => {
                writeln!(out, "Searching group: {group}")?;
                match missing_segment {
                    Some(segment) => writeln!(
                        out,
                        "\tgroup {} (no directory for segment '{segment}')",
                        verdict(*found)
                    ),
                    None => writeln!(out, "\tgroup {}", verdict(*found)),
                }
            }
            Self::Artifact {
                group,
                artifact,
                found,
            } => {
                writeln!(out, "Searching artifact: {group}:{artifact}")?;
                writeln!(out, "\tartifact {}", verdict(*found))
            }
            Self::Version {
                group,
                artifact,
                version,
                found,
            } => {
                writeln!(out, "Searching version: {group}:{artifact}:{version}")?;
                writeln!(out, "\tversion {}", verdict(*found))
            }
            Self::Artifacts { artifacts: names, .. } | Self::Versions { versions: names, .. } => {
                for name in names {
                    writeln!(out, "{name}")?;
                }
                Ok(())
            }
        }
    }
}
