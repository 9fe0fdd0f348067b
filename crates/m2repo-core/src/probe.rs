//! # Directory Prober
//!
//! The one place that reads directory state. Everything above this module
//! works against the [`DirectoryProber`] trait, so the resolver can run on
//! the real filesystem ([`FsProber`]) or on an in-memory tree
//! ([`MemoryProber`]) with no disk access.
//!
//! ## Absent vs. inaccessible
//!
//! A path that does not exist, or that exists but is not a directory,
//! lists as empty. Any other listing failure (permission denied, I/O error)
//! is returned as [`RepoError::Inaccessible`] so callers can tell
//! "not there" from "could not look". Only the listed path itself can fail
//! a listing; a child that cannot be classified is skipped.
//!
//! Listings are sorted lexicographically.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{RepoError, RepoResult};

/// Capability to list the immediate children of a directory.
pub trait DirectoryProber {
    /// Names of the immediate sub-directories of `path`, sorted.
    fn list_directories(&self, path: &Path) -> RepoResult<Vec<String>>;

    /// Names of the immediate regular files in `path`, sorted.
    fn list_files(&self, path: &Path) -> RepoResult<Vec<String>>;

    /// Whether `path` has a sub-directory called `name`.
    fn contains_directory(&self, path: &Path, name: &str) -> RepoResult<bool> {
        Ok(self.list_directories(path)?.iter().any(|child| child == name))
    }
}

impl<P: DirectoryProber + ?Sized> DirectoryProber for &P {
    fn list_directories(&self, path: &Path) -> RepoResult<Vec<String>> {
        (**self).list_directories(path)
    }

    fn list_files(&self, path: &Path) -> RepoResult<Vec<String>> {
        (**self).list_files(path)
    }

    fn contains_directory(&self, path: &Path, name: &str) -> RepoResult<bool> {
        (**self).contains_directory(path, name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    fn matches(self, meta: &Metadata) -> bool {
        match self {
            Self::Directory => meta.is_dir(),
            Self::File => meta.is_file(),
        }
    }
}

// ─── Filesystem ─────────────────────────────────────────────────────

/// [`DirectoryProber`] over the real filesystem.
///
/// Symbolic links are followed when classifying entries. A child whose
/// target cannot be read (dangling link, link loop, denied target) is
/// neither a directory nor a file. Entries whose names are not valid
/// UTF-8 are skipped since no `&str` query can name them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProber;

impl FsProber {
    /// Create a filesystem prober.
    pub fn new() -> Self {
        Self
    }

    fn list(&self, path: &Path, kind: EntryKind) -> RepoResult<Vec<String>> {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) if is_absent(path, &e) => {
                tracing::trace!(path = %path.display(), "nothing to list");
                return Ok(Vec::new());
            }
            Err(source) => return Err(inaccessible(path, source)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| inaccessible(path, source))?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::debug!(parent = %path.display(), name = ?raw, "skipping non-UTF-8 entry");
                    continue;
                }
            };
            let entry_path = entry.path();
            // Dangling or looping link, or a target we may not stat.
            let keep = match std::fs::metadata(&entry_path) {
                Ok(meta) => kind.matches(&meta),
                Err(e) => {
                    tracing::debug!(path = %entry_path.display(), error = %e, "skipping unclassifiable entry");
                    false
                }
            };
            if keep {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

impl DirectoryProber for FsProber {
    fn list_directories(&self, path: &Path) -> RepoResult<Vec<String>> {
        self.list(path, EntryKind::Directory)
    }

    fn list_files(&self, path: &Path) -> RepoResult<Vec<String>> {
        self.list(path, EntryKind::File)
    }
}

/// A failed `read_dir` means "nothing here" when the path is missing or
/// when it, or one of its ancestors, is not a directory.
fn is_absent(path: &Path, err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::NotFound {
        return true;
    }
    path.ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .any(|p| matches!(std::fs::metadata(p), Ok(meta) if !meta.is_dir()))
}

fn inaccessible(path: &Path, source: io::Error) -> RepoError {
    RepoError::Inaccessible {
        path: path.to_path_buf(),
        source,
    }
}

// ─── In-memory ──────────────────────────────────────────────────────

/// [`DirectoryProber`] over an in-memory directory tree.
///
/// Adding a file or directory implicitly creates its ancestors. Paths
/// registered with [`MemoryProber::deny`] fail to list with
/// [`RepoError::Inaccessible`], mimicking a permission error.
#[derive(Debug, Clone, Default)]
pub struct MemoryProber {
    entries: BTreeMap<PathBuf, EntryKind>,
    denied: BTreeSet<PathBuf>,
}

impl MemoryProber {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all of its ancestors.
    pub fn add_directory(&mut self, path: impl AsRef<Path>) -> &mut Self {
        for ancestor in path.as_ref().ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.entries
                    .insert(ancestor.to_path_buf(), EntryKind::Directory);
            }
        }
        self
    }

    /// Add a regular file, creating its parent directories.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_directory(parent);
        }
        self.entries.insert(path.to_path_buf(), EntryKind::File);
        self
    }

    /// Make listing `path` fail as if permission were denied.
    pub fn deny(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.denied.insert(path.as_ref().to_path_buf());
        self
    }

    fn list(&self, path: &Path, kind: EntryKind) -> RepoResult<Vec<String>> {
        if self.denied.contains(path) {
            return Err(inaccessible(
                path,
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        if self.entries.get(path) != Some(&EntryKind::Directory) {
            return Ok(Vec::new());
        }
        // BTreeMap iteration order keeps the result sorted by path, and
        // children of a single parent sort the same way by name.
        let names = self
            .entries
            .iter()
            .filter(|(child, child_kind)| **child_kind == kind && child.parent() == Some(path))
            .filter_map(|(child, _)| child.file_name()?.to_str().map(str::to_owned))
            .collect();
        Ok(names)
    }
}

impl DirectoryProber for MemoryProber {
    fn list_directories(&self, path: &Path) -> RepoResult<Vec<String>> {
        self.list(path, EntryKind::Directory)
    }

    fn list_files(&self, path: &Path) -> RepoResult<Vec<String>> {
        self.list(path, EntryKind::File)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── MemoryProber ────────────────────────────────────────────────

    fn tree() -> MemoryProber {
        let mut fs = MemoryProber::new();
        fs.add_file("/repo/org/example/lib/1.0/lib-1.0.jar")
            .add_file("/repo/org/example/lib/1.0/lib-1.0.pom")
            .add_directory("/repo/org/example/tool")
            .add_file("/repo/org/readme.txt");
        fs
    }

    #[test]
    fn memory_lists_directories_only() {
        let fs = tree();
        assert_eq!(
            fs.list_directories(Path::new("/repo/org")).unwrap(),
            ["example"]
        );
        assert_eq!(
            fs.list_directories(Path::new("/repo/org/example")).unwrap(),
            ["lib", "tool"]
        );
    }

    #[test]
    fn memory_lists_files_only() {
        let fs = tree();
        assert_eq!(
            fs.list_files(Path::new("/repo/org/example/lib/1.0")).unwrap(),
            ["lib-1.0.jar", "lib-1.0.pom"]
        );
        assert_eq!(fs.list_files(Path::new("/repo/org")).unwrap(), ["readme.txt"]);
    }

    #[test]
    fn memory_absent_and_file_paths_list_empty() {
        let fs = tree();
        assert!(fs.list_directories(Path::new("/repo/com")).unwrap().is_empty());
        assert!(fs
            .list_files(Path::new("/repo/org/readme.txt"))
            .unwrap()
            .is_empty());
        assert!(fs
            .list_directories(Path::new("/repo/org/example/tool"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn memory_contains_directory() {
        let fs = tree();
        assert!(fs.contains_directory(Path::new("/repo"), "org").unwrap());
        assert!(!fs.contains_directory(Path::new("/repo"), "com").unwrap());
        // A file child is not a directory child.
        assert!(!fs
            .contains_directory(Path::new("/repo/org"), "readme.txt")
            .unwrap());
    }

    #[test]
    fn memory_denied_path_is_inaccessible() {
        let mut fs = tree();
        fs.deny("/repo/org/example");
        let err = fs
            .list_directories(Path::new("/repo/org/example"))
            .unwrap_err();
        match err {
            RepoError::Inaccessible { path, source } => {
                assert_eq!(path, Path::new("/repo/org/example"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected Inaccessible, got {other:?}"),
        }
    }

    #[test]
    fn prober_by_reference() {
        let fs = tree();
        let by_ref: &MemoryProber = &fs;
        assert_eq!(
            DirectoryProber::list_directories(&by_ref, Path::new("/repo")).unwrap(),
            ["org"]
        );
    }

    // ── FsProber ────────────────────────────────────────────────────

    #[test]
    fn fs_lists_sorted_children_by_kind() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("zeta")).unwrap();
        std::fs::create_dir(dir.path().join("alpha")).unwrap();
        std::fs::write(dir.path().join("b.jar"), b"").unwrap();
        std::fs::write(dir.path().join("a.pom"), b"").unwrap();

        let fs = FsProber::new();
        assert_eq!(fs.list_directories(dir.path()).unwrap(), ["alpha", "zeta"]);
        assert_eq!(fs.list_files(dir.path()).unwrap(), ["a.pom", "b.jar"]);
    }

    #[test]
    fn fs_missing_path_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let fs = FsProber::new();
        assert!(fs
            .list_directories(&dir.path().join("missing"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn fs_file_path_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, b"x").unwrap();

        let fs = FsProber::new();
        assert!(fs.list_files(&file).unwrap().is_empty());
        // Beneath a file: the ancestor is not a directory.
        assert!(fs.list_files(&file.join("child")).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn fs_follows_symlinks_and_skips_dangling() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling"))
            .unwrap();

        let fs = FsProber::new();
        assert_eq!(fs.list_directories(dir.path()).unwrap(), ["linked", "real"]);
        assert!(fs.list_files(dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn fs_skips_symlink_loop_beside_real_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("org")).unwrap();
        std::fs::write(dir.path().join("a.pom"), b"").unwrap();
        std::os::unix::fs::symlink(dir.path().join("loop"), dir.path().join("loop")).unwrap();

        let fs = FsProber::new();
        assert_eq!(fs.list_directories(dir.path()).unwrap(), ["org"]);
        assert_eq!(fs.list_files(dir.path()).unwrap(), ["a.pom"]);
        assert!(fs.contains_directory(dir.path(), "org").unwrap());
    }
}
