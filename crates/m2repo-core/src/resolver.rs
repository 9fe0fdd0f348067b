//! # Existence Resolver
//!
//! [`LocalRepository`] answers group, artifact, and version queries by
//! walking the repository tree through a [`DirectoryProber`].
//!
//! Each query is a fresh top-down walk; nothing is cached between calls.
//! The walk fails closed: the first missing level ends it and the query
//! reports absence without probing further down.
//!
//! ## Levels
//!
//! - **Group**: every namespace segment is a directory nested in the
//!   previous one ([`LocalRepository::group_exists`]).
//! - **Artifact**: the artifact directory exists below the group *and*
//!   holds at least one complete version ([`LocalRepository::artifact_exists`]).
//!   A directory with only stray marker files is not an artifact.
//! - **Version**: see [`crate::completeness`].

use crate::config::RepositoryConfig;
use crate::error::RepoResult;
use crate::group::GroupId;
use crate::layout::RepositoryLayout;
use crate::probe::{DirectoryProber, FsProber};

/// Read-only view of a local repository.
#[derive(Debug, Clone)]
pub struct LocalRepository<P = FsProber> {
    pub(crate) layout: RepositoryLayout,
    pub(crate) prober: P,
}

impl LocalRepository<FsProber> {
    /// Open the repository described by `config` on the real filesystem.
    pub fn open(config: &RepositoryConfig) -> Self {
        Self::with_prober(config, FsProber::new())
    }
}

impl<P: DirectoryProber> LocalRepository<P> {
    /// Open the repository described by `config` through any prober.
    pub fn with_prober(config: &RepositoryConfig, prober: P) -> Self {
        Self {
            layout: RepositoryLayout::new(config.root()),
            prober,
        }
    }

    /// Path resolution for this repository.
    pub fn layout(&self) -> &RepositoryLayout {
        &self.layout
    }

    /// Whether the group's directory chain exists.
    pub fn group_exists(&self, group: &str) -> RepoResult<bool> {
        let group = self.parse_group(group)?;
        Ok(self.missing_segment(&group)?.is_none())
    }

    /// The first namespace segment with no matching directory, or `None`
    /// when the whole group resolves.
    pub fn first_missing_segment(&self, group: &str) -> RepoResult<Option<String>> {
        let group = self.parse_group(group)?;
        self.missing_segment(&group)
    }

    /// Whether the group's directory chain exists and at least one of its
    /// artifacts passes [`LocalRepository::artifact_exists`].
    pub fn group_has_artifacts(&self, group: &str) -> RepoResult<bool> {
        let group = self.parse_group(group)?;
        Ok(!self.present_artifacts(&group)?.is_empty())
    }

    /// Whether the artifact directory exists and holds a complete version.
    pub fn artifact_exists(&self, group: &str, artifact: &str) -> RepoResult<bool> {
        let group = self.parse_group(group)?;
        self.artifact_present(&group, artifact)
    }

    /// Artifacts of a group that pass [`LocalRepository::artifact_exists`],
    /// sorted.
    pub fn artifacts_of_group(&self, group: &str) -> RepoResult<Vec<String>> {
        let group = self.parse_group(group)?;
        self.present_artifacts(&group)
    }

    /// Whether the artifact directory exists, regardless of its contents.
    pub fn artifact_folder_exists(&self, group: &str, artifact: &str) -> RepoResult<bool> {
        let group = self.parse_group(group)?;
        self.artifact_folder_present(&group, artifact)
    }

    /// Whether the version directory exists, regardless of its contents.
    pub fn version_folder_exists(
        &self,
        group: &str,
        artifact: &str,
        version: &str,
    ) -> RepoResult<bool> {
        let group = self.parse_group(group)?;
        self.version_folder_present(&group, artifact, version)
    }

    pub(crate) fn parse_group(&self, group: &str) -> RepoResult<GroupId> {
        Ok(GroupId::parse(group)?)
    }

    fn missing_segment(&self, group: &GroupId) -> RepoResult<Option<String>> {
        let mut path = self.layout.root().to_path_buf();
        for segment in group.segments() {
            if !self.prober.contains_directory(&path, segment)? {
                tracing::debug!(group = %group, segment = %segment, "group segment missing");
                return Ok(Some(segment.clone()));
            }
            path.push(segment);
        }
        Ok(None)
    }

    pub(crate) fn artifact_folder_present(&self, group: &GroupId, artifact: &str) -> RepoResult<bool> {
        if self.missing_segment(group)?.is_some() {
            return Ok(false);
        }
        self.prober
            .contains_directory(&self.layout.group_path(group), artifact)
    }

    pub(crate) fn version_folder_present(
        &self,
        group: &GroupId,
        artifact: &str,
        version: &str,
    ) -> RepoResult<bool> {
        if !self.artifact_folder_present(group, artifact)? {
            return Ok(false);
        }
        self.prober
            .contains_directory(&self.layout.artifact_path(group, artifact), version)
    }

    fn artifact_present(&self, group: &GroupId, artifact: &str) -> RepoResult<bool> {
        if !self.artifact_folder_present(group, artifact)? {
            return Ok(false);
        }
        self.has_complete_version_at(&self.layout.artifact_path(group, artifact))
    }

    /// Walks the group chain once, then checks each candidate one level down.
    fn present_artifacts(&self, group: &GroupId) -> RepoResult<Vec<String>> {
        if self.missing_segment(group)?.is_some() {
            return Ok(Vec::new());
        }
        let path = self.layout.group_path(group);
        let mut artifacts = Vec::new();
        for candidate in self.prober.list_directories(&path)? {
            if self.has_complete_version_at(&path.join(&candidate))? {
                artifacts.push(candidate);
            }
        }
        Ok(artifacts)
    }
}
