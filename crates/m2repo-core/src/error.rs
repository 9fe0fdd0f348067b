//! # Error Hierarchy
//!
//! Structured error types for repository queries, built with `thiserror`.
//!
//! A missing group, artifact, or version is not an error. Queries report
//! absence as `false`, `None`, or an empty listing. The variants here cover
//! the conditions a caller must be able to tell apart from absence: a
//! directory that exists but cannot be read, an identifier that cannot be
//! mapped to a path, and a configuration that cannot be resolved.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type RepoResult<T> = Result<T, RepoError>;

/// Top-level error type for repository queries.
#[derive(Error, Debug)]
pub enum RepoError {
    /// A directory listing failed for a reason other than the path being
    /// absent or not being a directory (permission denied, I/O failure).
    #[error("repository path is inaccessible: {}: {source}", .path.display())]
    Inaccessible {
        /// The path whose listing failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An identifier failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The repository configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validation errors for identifiers supplied by callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Group id is empty or contains an empty segment.
    #[error("invalid group id: \"{0}\" (expected non-empty segments separated by '.')")]
    InvalidGroupId(String),

    /// Coordinate does not have the `group:artifact[:version]` shape.
    #[error("invalid coordinate: \"{value}\" ({reason})")]
    InvalidCoordinate {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors while resolving the repository root.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No home directory could be determined for the default root.
    #[error("cannot determine the home directory; pass an explicit repository root")]
    HomeDirectoryUnavailable,

    /// The configuration file could not be read.
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`crate::RepositoryConfig`].
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}
