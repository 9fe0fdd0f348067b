//! # Repository Layout — Path Resolution
//!
//! Maps identifiers to the path a correctly published artifact would occupy:
//!
//! ```text
//! {root}/{group segments...}/{artifact}/{version}
//! ```
//!
//! Pure: nothing here touches the filesystem, and a resolved path says
//! nothing about whether it exists.

use std::path::{Path, PathBuf};

use crate::group::GroupId;

/// Path resolver for a repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLayout {
    root: PathBuf,
}

impl RepositoryLayout {
    /// Create a layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Expected directory of a group.
    pub fn group_path(&self, group: &GroupId) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(group.segments());
        path
    }

    /// Expected directory of an artifact within a group.
    pub fn artifact_path(&self, group: &GroupId, artifact: &str) -> PathBuf {
        self.group_path(group).join(artifact)
    }

    /// Expected directory of a version of an artifact.
    pub fn version_path(&self, group: &GroupId, artifact: &str, version: &str) -> PathBuf {
        self.artifact_path(group, artifact).join(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> RepositoryLayout {
        RepositoryLayout::new("/home/dev/.m2/repository")
    }

    fn plugins() -> GroupId {
        GroupId::parse("org.apache.maven.plugins").unwrap()
    }

    #[test]
    fn group_path_nests_segments() {
        assert_eq!(
            layout().group_path(&plugins()),
            Path::new("/home/dev/.m2/repository/org/apache/maven/plugins")
        );
    }

    #[test]
    fn artifact_path_appends_artifact() {
        assert_eq!(
            layout().artifact_path(&plugins(), "maven-clean-plugin"),
            Path::new("/home/dev/.m2/repository/org/apache/maven/plugins/maven-clean-plugin")
        );
    }

    #[test]
    fn version_path_appends_version() {
        assert_eq!(
            layout().version_path(&plugins(), "maven-clean-plugin", "2.6.1"),
            Path::new(
                "/home/dev/.m2/repository/org/apache/maven/plugins/maven-clean-plugin/2.6.1"
            )
        );
    }

    #[test]
    fn paths_are_built_without_io() {
        let layout = RepositoryLayout::new("/definitely/not/here");
        let group = GroupId::parse("x.y").unwrap();
        assert_eq!(layout.group_path(&group), Path::new("/definitely/not/here/x/y"));
    }
}
