//! # Completeness Checker
//!
//! Decides whether a version directory holds a finished download.
//!
//! Maven writes `<file>.lastUpdated` when it attempts a transfer. A marker
//! next to its finished twin (`a.jar` beside `a.jar.lastUpdated`) is
//! harmless. A marker without a twin means some transfer never completed,
//! and the whole version is treated as absent.
//!
//! | files in version directory           | verdict |
//! |--------------------------------------|---------|
//! | *(none)*                             | absent  |
//! | `a.jar`                              | present |
//! | `a.jar.lastUpdated`                  | absent  |
//! | `a.jar`, `a.jar.lastUpdated`         | present |
//! | `a.jar`, `b.jar.lastUpdated`         | absent  |

use std::path::Path;

use crate::config::MARKER_SUFFIX;
use crate::error::RepoResult;
use crate::group::GroupId;
use crate::probe::DirectoryProber;
use crate::resolver::LocalRepository;

/// Whether a version directory's file names describe a complete download.
pub fn is_complete<S: AsRef<str>>(files: &[S]) -> bool {
    if files.is_empty() {
        return false;
    }

    let markers = with_suffix(files, MARKER_SUFFIX);
    if markers.is_empty() {
        return true;
    }
    if markers.len() == files.len() {
        return false;
    }

    let plain = without_suffix(files, MARKER_SUFFIX);
    markers.iter().all(|marker| {
        marker
            .strip_suffix(MARKER_SUFFIX)
            .is_some_and(|twin| contains_name(&plain, twin))
    })
}

/// Names ending with `suffix`, in input order.
pub fn with_suffix<S: AsRef<str>>(names: &[S], suffix: &str) -> Vec<String> {
    names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| name.ends_with(suffix))
        .map(str::to_owned)
        .collect()
}

/// Names not ending with `suffix`, in input order.
pub fn without_suffix<S: AsRef<str>>(names: &[S], suffix: &str) -> Vec<String> {
    names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !name.ends_with(suffix))
        .map(str::to_owned)
        .collect()
}

/// Whether `names` contains `value` exactly. Always false when empty.
pub fn contains_name<S: AsRef<str>>(names: &[S], value: &str) -> bool {
    names.iter().any(|name| name.as_ref() == value)
}

impl<P: DirectoryProber> LocalRepository<P> {
    /// Whether a version is present and completely downloaded.
    ///
    /// The group chain, the artifact directory, and the version directory
    /// must all exist, and the version's files must pass [`is_complete`].
    /// A `true` here implies [`LocalRepository::artifact_exists`] for the
    /// same group and artifact.
    pub fn version_exists(&self, group: &str, artifact: &str, version: &str) -> RepoResult<bool> {
        let group = self.parse_group(group)?;
        self.version_complete(&group, artifact, version)
    }

    /// Versions of an artifact that pass [`LocalRepository::version_exists`],
    /// sorted.
    pub fn artifact_versions(&self, group: &str, artifact: &str) -> RepoResult<Vec<String>> {
        let group = self.parse_group(group)?;
        self.complete_versions(&group, artifact)
    }

    fn version_complete(
        &self,
        group: &GroupId,
        artifact: &str,
        version: &str,
    ) -> RepoResult<bool> {
        if !self.version_folder_present(group, artifact, version)? {
            return Ok(false);
        }
        self.version_complete_at(&self.layout.version_path(group, artifact, version))
    }

    fn complete_versions(&self, group: &GroupId, artifact: &str) -> RepoResult<Vec<String>> {
        if !self.artifact_folder_present(group, artifact)? {
            return Ok(Vec::new());
        }
        let path = self.layout.artifact_path(group, artifact);
        let mut versions = Vec::new();
        for candidate in self.prober.list_directories(&path)? {
            if self.version_complete_at(&path.join(&candidate))? {
                versions.push(candidate);
            }
        }
        Ok(versions)
    }

    /// Whether any version directory directly under an already resolved
    /// artifact path is complete. Stops at the first complete one.
    pub(crate) fn has_complete_version_at(&self, artifact_path: &Path) -> RepoResult<bool> {
        for candidate in self.prober.list_directories(artifact_path)? {
            if self.version_complete_at(&artifact_path.join(&candidate))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn version_complete_at(&self, version_path: &Path) -> RepoResult<bool> {
        let files = self.prober.list_files(version_path)?;
        let complete = is_complete(&files);
        tracing::debug!(
            path = %version_path.display(),
            files = files.len(),
            complete,
            "checked version completeness"
        );
        Ok(complete)
    }
}
