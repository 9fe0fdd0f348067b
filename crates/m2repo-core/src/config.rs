//! # Repository Configuration
//!
//! The repository root is the only environment dependency. It is resolved
//! once into a [`RepositoryConfig`] and handed to the resolver; nothing in
//! this crate reads it from global state.
//!
//! Domain constants of the Maven layout live here as named values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, RepoResult};

/// Separator between the segments of a group id (`org.apache.maven`).
pub const NAMESPACE_DELIMITER: char = '.';

/// Suffix of the marker file Maven leaves behind for a transfer that was
/// started but may not have finished.
pub const MARKER_SUFFIX: &str = ".lastUpdated";

/// Default repository location relative to the user's home directory.
pub const DEFAULT_REPOSITORY_DIR: &str = ".m2/repository";

/// Separator between the parts of a `group:artifact[:version]` coordinate.
pub const COORDINATE_SEPARATOR: char = ':';

/// Immutable repository configuration.
///
/// Loadable from YAML:
///
/// ```yaml
/// root: /srv/maven/repository
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Absolute base path of the local repository.
    pub root: PathBuf,
}

impl RepositoryConfig {
    /// Configuration rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default configuration: `<home>/.m2/repository`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeDirectoryUnavailable`] (wrapped in
    /// [`crate::RepoError::Config`]) when the platform reports no home
    /// directory for the current user.
    pub fn from_home() -> RepoResult<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirectoryUnavailable)?;
        Ok(Self::new(home.join(DEFAULT_REPOSITORY_DIR)))
    }

    /// Load configuration from a YAML file.
    ///
    /// A relative `root` is interpreted relative to the directory holding
    /// the configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] or [`ConfigError::Parse`], wrapped in
    /// [`crate::RepoError::Config`].
    pub fn load(path: &Path) -> RepoResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if config.root.is_relative() {
            if let Some(parent) = path.parent() {
                config.root = parent.join(&config.root);
            }
        }
        Ok(config)
    }

    /// The repository root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;

    #[test]
    fn new_keeps_root_verbatim() {
        let config = RepositoryConfig::new("/srv/m2");
        assert_eq!(config.root(), Path::new("/srv/m2"));
    }

    #[test]
    fn from_home_ends_with_default_dir() {
        // Only meaningful where the platform reports a home directory.
        if let Ok(config) = RepositoryConfig::from_home() {
            assert!(config.root().ends_with(".m2/repository"));
        }
    }

    #[test]
    fn load_absolute_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("m2repo.yaml");
        std::fs::write(&file, "root: /srv/maven/repository\n").unwrap();

        let config = RepositoryConfig::load(&file).unwrap();
        assert_eq!(config.root(), Path::new("/srv/maven/repository"));
    }

    #[test]
    fn load_relative_root_is_anchored_at_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("m2repo.yaml");
        std::fs::write(&file, "root: repo\n").unwrap();

        let config = RepositoryConfig::load(&file).unwrap();
        assert_eq!(config.root(), dir.path().join("repo"));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RepositoryConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, RepoError::Config(ConfigError::Read { .. })), "{err:?}");
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("m2repo.yaml");
        std::fs::write(&file, "root: /x\nmirror: http://example\n").unwrap();

        let err = RepositoryConfig::load(&file).unwrap_err();
        assert!(matches!(err, RepoError::Config(ConfigError::Parse { .. })), "{err:?}");
    }

    #[test]
    fn marker_suffix_starts_with_dot() {
        assert!(MARKER_SUFFIX.starts_with('.'));
        assert_eq!(NAMESPACE_DELIMITER, '.');
    }
}
