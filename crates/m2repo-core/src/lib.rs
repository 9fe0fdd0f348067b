#![deny(missing_docs)]

//! # m2repo-core — Local Repository Existence Resolution
//!
//! Answers whether a group, an artifact, or a version is present in a local
//! Maven-layout repository (`~/.m2/repository` by default), and whether a
//! version directory holds a complete download rather than a stalled one.
//!
//! ## Components
//!
//! - [`layout`] — pure path resolution from identifiers to on-disk paths.
//! - [`probe`] — the only filesystem-touching primitive, behind the
//!   [`DirectoryProber`] trait, with [`FsProber`] and [`MemoryProber`].
//! - [`resolver`] — [`LocalRepository`], the group/artifact/version queries.
//! - [`completeness`] — the `.lastUpdated` marker reconciliation rule.
//!
//! ## Crate Policy
//!
//! - Read-only. Nothing in this crate writes, locks, or downloads.
//! - No caching: every query re-reads the directory state.
//! - "Absent" is a value (`false`, `None`, empty `Vec`), never an error.
//!   An unreadable directory is an error ([`RepoError::Inaccessible`]).
//! - No `.unwrap()` outside tests.

pub mod completeness;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod group;
pub mod layout;
pub mod probe;
pub mod resolver;

// Re-export primary types at crate root for ergonomic imports.
pub use completeness::{contains_name, is_complete, with_suffix, without_suffix};
pub use config::{
    RepositoryConfig, COORDINATE_SEPARATOR, DEFAULT_REPOSITORY_DIR, MARKER_SUFFIX,
    NAMESPACE_DELIMITER,
};
pub use coordinate::Coordinate;
pub use error::{ConfigError, RepoError, RepoResult, ValidationError};
pub use group::GroupId;
pub use layout::RepositoryLayout;
pub use probe::{DirectoryProber, FsProber, MemoryProber};
pub use resolver::LocalRepository;
