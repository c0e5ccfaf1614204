//! directory
//!
//! Directory and file operations against the host filesystem.
//!
//! # Session
//!
//! A [`Session`] owns the single current directory. Relative names given to
//! any operation are resolved against it; absolute names replace it. Only a
//! successful [`Session::change_directory`] moves it.
//!
//! # Outcomes
//!
//! Mutating and reading operations return `Result<_, OpError>`. Host failures
//! are classified locally into [`OpError`] and never escape as panics.
//! Listing operations are consumed as data: on failure they log a warning to
//! the diagnostic channel and return an empty list.
//!
//! # Invariants
//!
//! - Create, delete and rename never overwrite and never partially apply,
//!   except that `create_file` keeps any parent directories it created
//! - The current directory always names a directory that existed when it was
//!   last changed

mod error;

pub use error::OpError;

use std::collections::HashSet;
use std::fs::{self, Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::core::list::OrderedList;
use crate::core::types::{Action, DirectoryEntry, Entry, EntryKind, FileEntry};
use crate::ui::output::{self, Verbosity};

/// Current-directory context and the operations that run against it.
#[derive(Debug, Clone)]
pub struct Session {
    current: PathBuf,
    verbosity: Verbosity,
}

impl Session {
    /// Create a session positioned at `start`.
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            current: start.into(),
            verbosity: Verbosity::Normal,
        }
    }

    /// Set the verbosity used for listing diagnostics.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// The current directory.
    pub fn current_dir(&self) -> &Path {
        &self.current
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.current.join(name)
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Immediate subdirectories of the current directory.
    pub fn list_directories(&self) -> OrderedList<DirectoryEntry> {
        self.directories_in(&self.current)
    }

    /// Immediate files of the current directory.
    pub fn list_files(&self) -> OrderedList<FileEntry> {
        self.files_in(&self.current)
    }

    fn directories_in(&self, path: &Path) -> OrderedList<DirectoryEntry> {
        self.read_children(path, "directories")
            .into_iter()
            .filter(|(_, metadata)| metadata.is_dir())
            .map(|(child, metadata)| DirectoryEntry::snapshot(child, &metadata))
            .collect()
    }

    fn files_in(&self, path: &Path) -> OrderedList<FileEntry> {
        self.read_children(path, "files")
            .into_iter()
            .filter(|(_, metadata)| !metadata.is_dir())
            .map(|(child, metadata)| FileEntry::snapshot(child, &metadata))
            .collect()
    }

    /// Enumerate children with their metadata, following symlinks.
    ///
    /// Dangling symlinks are reported with their own metadata, which makes
    /// them show up as files.
    fn read_children(&self, path: &Path, what: &str) -> Vec<(PathBuf, Metadata)> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                let reason = match err.kind() {
                    io::ErrorKind::PermissionDenied => ": access denied".to_string(),
                    _ => format!(" ({})", err),
                };
                output::warn(
                    format!("Could not fetch {} from {}{}", what, path.display(), reason),
                    self.verbosity,
                );
                return Vec::new();
            }
        };

        let mut children = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    output::debug(
                        format!("skipping entry in {}: {}", path.display(), err),
                        self.verbosity,
                    );
                    continue;
                }
            };

            let child = entry.path();
            match fs::metadata(&child).or_else(|_| fs::symlink_metadata(&child)) {
                Ok(metadata) => children.push((child, metadata)),
                Err(err) => output::debug(
                    format!("skipping {}: {}", child.display(), err),
                    self.verbosity,
                ),
            }
        }

        children
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move the current directory.
    ///
    /// `..` moves to the parent if there is one. Anything else is resolved
    /// against the current directory and must name an existing directory.
    /// On failure the current directory is unchanged.
    pub fn change_directory(&mut self, name: &str) -> Result<(), OpError> {
        if name == ".." {
            return match self.current.parent() {
                Some(parent) if parent.is_dir() => {
                    self.current = parent.to_path_buf();
                    Ok(())
                }
                _ => Err(OpError::NoSuchDirectory(name.to_string())),
            };
        }

        let target = self.resolve(name);
        if !target.is_dir() {
            return Err(OpError::NoSuchDirectory(name.to_string()));
        }

        self.current = fs::canonicalize(&target).unwrap_or(target);
        output::debug(
            format!("current directory is now {}", self.current.display()),
            self.verbosity,
        );
        Ok(())
    }

    // =========================================================================
    // Reading
    // =========================================================================

    /// Full text of a file. Invalid UTF-8 is replaced, not rejected.
    pub fn read_file(&self, name: &str) -> Result<String, OpError> {
        let path = self.resolve(name);
        if !path.is_file() {
            return Err(OpError::not_found(EntryKind::File, name));
        }

        let bytes =
            fs::read(&path).map_err(|e| OpError::classify(e, Action::Fetch, EntryKind::File, name))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Whether a file contains `needle` as a literal substring.
    pub fn search_file(&self, name: &str, needle: &str) -> Result<bool, OpError> {
        let text = self.read_file(name)?;
        Ok(text.contains(needle))
    }

    /// Total byte length of every file below a directory.
    ///
    /// Each directory is visited once by its canonical path, so symlink
    /// cycles terminate. Unreadable subdirectories contribute nothing.
    pub fn directory_size(&self, name: &str) -> Result<u64, OpError> {
        let path = self.resolve(name);
        if !path.is_dir() {
            return Err(OpError::not_found(EntryKind::Directory, name));
        }

        let mut visited = HashSet::new();
        Ok(self.subtree_size(&path, &mut visited))
    }

    fn subtree_size(&self, path: &Path, visited: &mut HashSet<PathBuf>) -> u64 {
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if !visited.insert(key) {
            output::debug(
                format!("already counted {}, skipping", path.display()),
                self.verbosity,
            );
            return 0;
        }

        let files: u64 = self.files_in(path).iter().map(|file| file.len).sum();
        let subdirs: u64 = self
            .directories_in(path)
            .iter()
            .map(|dir| self.subtree_size(dir.path(), visited))
            .sum();

        files + subdirs
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Create an empty file, creating missing parent directories first.
    ///
    /// Parent directories created here are kept even if creating the file
    /// itself fails.
    pub fn create_file(&self, name: &str) -> Result<(), OpError> {
        let path = self.resolve(name);
        let classify = |e| OpError::classify(e, Action::Create, EntryKind::File, name);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                fs::create_dir_all(parent).map_err(|e| match e.kind() {
                    // A file is in the way of a parent, not at the target
                    io::ErrorKind::AlreadyExists => OpError::Failed {
                        action: Action::Create,
                        kind: EntryKind::File,
                        name: name.to_string(),
                        source: e,
                    },
                    _ => classify(e),
                })?;
            }
        }

        if path.exists() {
            return Err(OpError::already_exists(EntryKind::File, name));
        }

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(classify)?;
        Ok(())
    }

    /// Create a directory, including missing parents.
    pub fn create_directory(&self, name: &str) -> Result<(), OpError> {
        let path = self.resolve(name);
        if path.is_dir() {
            return Err(OpError::already_exists(EntryKind::Directory, name));
        }

        fs::create_dir_all(&path)
            .map_err(|e| OpError::classify(e, Action::Create, EntryKind::Directory, name))
    }

    /// Delete a file.
    pub fn delete_file(&self, name: &str) -> Result<(), OpError> {
        let path = self.resolve(name);
        if !path.is_file() {
            return Err(OpError::not_found(EntryKind::File, name));
        }

        fs::remove_file(&path).map_err(|e| OpError::classify(e, Action::Delete, EntryKind::File, name))
    }

    /// Delete a directory and everything below it.
    pub fn delete_directory(&self, name: &str) -> Result<(), OpError> {
        let path = self.resolve(name);
        if !path.is_dir() {
            return Err(OpError::not_found(EntryKind::Directory, name));
        }

        fs::remove_dir_all(&path)
            .map_err(|e| OpError::classify(e, Action::Delete, EntryKind::Directory, name))
    }

    /// Rename or move a file. Never overwrites an existing destination.
    pub fn rename_file(&self, old: &str, new: &str) -> Result<(), OpError> {
        let from = self.resolve(old);
        let to = self.resolve(new);

        if !from.is_file() {
            return Err(OpError::not_found(EntryKind::File, old));
        }
        if to.exists() {
            return Err(OpError::already_exists(EntryKind::File, new));
        }

        fs::rename(&from, &to).map_err(|e| OpError::classify(e, Action::Rename, EntryKind::File, old))
    }

    /// Rename or move a directory. Never overwrites an existing destination.
    pub fn rename_directory(&self, old: &str, new: &str) -> Result<(), OpError> {
        let from = self.resolve(old);
        let to = self.resolve(new);

        if !from.is_dir() {
            return Err(OpError::not_found(EntryKind::Directory, old));
        }
        if to.exists() {
            return Err(OpError::already_exists(EntryKind::Directory, new));
        }

        fs::rename(&from, &to)
            .map_err(|e| OpError::classify(e, Action::Rename, EntryKind::Directory, old))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        let session = Session::new(dir.path()).with_verbosity(Verbosity::Quiet);
        (dir, session)
    }

    fn names<T: Entry>(list: &OrderedList<T>) -> Vec<String> {
        let mut names: Vec<String> = list.iter().map(|e| e.name().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn lists_files_and_directories_separately() {
        let (dir, session) = session();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        assert_eq!(names(&session.list_directories()), vec!["sub"]);
        assert_eq!(names(&session.list_files()), vec!["a.txt"]);
    }

    #[test]
    fn listing_missing_directory_is_empty() {
        let (dir, _) = session();
        let session = Session::new(dir.path().join("gone")).with_verbosity(Verbosity::Quiet);
        assert!(session.list_files().is_empty());
        assert!(session.list_directories().is_empty());
    }

    #[test]
    fn change_into_child_and_back() {
        let (dir, mut session) = session();
        fs::create_dir(dir.path().join("child")).unwrap();
        let base = fs::canonicalize(dir.path()).unwrap();

        session.change_directory("child").unwrap();
        assert_eq!(session.current_dir(), base.join("child"));

        session.change_directory("..").unwrap();
        assert_eq!(session.current_dir(), base);
    }

    #[test]
    fn change_to_absolute_path() {
        let (dir, mut session) = session();
        let other = TempDir::new().unwrap();

        session
            .change_directory(other.path().to_str().unwrap())
            .unwrap();
        assert_eq!(session.current_dir(), fs::canonicalize(other.path()).unwrap());
        drop(dir);
    }

    #[test]
    fn change_to_missing_directory_keeps_current() {
        let (dir, mut session) = session();
        let err = session.change_directory("nowhere").unwrap_err();

        assert_eq!(err.to_string(), "No such directory: nowhere");
        assert_eq!(session.current_dir(), dir.path());
    }

    #[test]
    fn change_to_file_fails() {
        let (dir, mut session) = session();
        fs::write(dir.path().join("f"), "").unwrap();
        assert!(session.change_directory("f").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn parent_of_root_does_not_exist() {
        let mut session = Session::new("/");
        let err = session.change_directory("..").unwrap_err();
        assert_eq!(err.to_string(), "No such directory: ..");
        assert_eq!(session.current_dir(), Path::new("/"));
    }

    #[test]
    fn read_file_returns_content() {
        let (dir, session) = session();
        fs::write(dir.path().join("a.txt"), "hello world").unwrap();
        assert_eq!(session.read_file("a.txt").unwrap(), "hello world");
    }

    #[test]
    fn read_missing_file() {
        let (_dir, session) = session();
        let err = session.read_file("a.txt").unwrap_err();
        assert_eq!(err.to_string(), "File a.txt does not exist");
    }

    #[test]
    fn read_directory_as_file_is_missing() {
        let (dir, session) = session();
        fs::create_dir(dir.path().join("d")).unwrap();
        assert!(matches!(
            session.read_file("d"),
            Err(OpError::NotFound { .. })
        ));
    }

    #[test]
    fn read_invalid_utf8_is_lossy() {
        let (dir, session) = session();
        fs::write(dir.path().join("bin"), [b'o', b'k', 0xff]).unwrap();
        assert_eq!(session.read_file("bin").unwrap(), "ok\u{fffd}");
    }

    #[test]
    fn search_file_substring() {
        let (dir, session) = session();
        fs::write(dir.path().join("a.txt"), "needle in a haystack").unwrap();

        assert!(session.search_file("a.txt", "needle").unwrap());
        assert!(!session.search_file("a.txt", "Needle").unwrap());
        assert!(session.search_file("b.txt", "needle").is_err());
    }

    #[test]
    fn create_file_with_missing_parents() {
        let (dir, session) = session();
        session.create_file("a/b/c.txt").unwrap();
        assert!(dir.path().join("a/b/c.txt").is_file());
    }

    #[test]
    fn create_existing_file_leaves_it_untouched() {
        let (dir, session) = session();
        fs::write(dir.path().join("a.txt"), "keep").unwrap();

        let err = session.create_file("a.txt").unwrap_err();
        assert_eq!(err.to_string(), "File a.txt already exists");
        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "keep");
    }

    #[test]
    fn create_file_under_a_file_is_a_failure() {
        let (dir, session) = session();
        fs::write(dir.path().join("f"), "").unwrap();

        let err = session.create_file("f/x.txt").unwrap_err();
        assert!(matches!(err, OpError::Failed { .. }));
        assert_eq!(err.to_string(), "Could not create file f/x.txt");
        assert!(dir.path().join("f").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn overlong_names_are_invalid() {
        let (dir, session) = session();
        let long = "a".repeat(300);

        let err = session.create_file(&long).unwrap_err();
        assert_eq!(err.to_string(), format!("Invalid path or file name: {}", long));
        let err = session.create_directory(&long).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Invalid path or directory name: {}", long)
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn create_file_with_nul_is_invalid() {
        let (_dir, session) = session();
        let err = session.create_file("bad\0name").unwrap_err();
        assert_eq!(err.to_string(), "Invalid path or file name: bad\0name");
    }

    #[test]
    fn create_directory_twice() {
        let (dir, session) = session();
        session.create_directory("docs").unwrap();
        assert!(dir.path().join("docs").is_dir());

        let err = session.create_directory("docs").unwrap_err();
        assert_eq!(err.to_string(), "Directory docs already exists");
    }

    #[test]
    fn create_nested_directory() {
        let (dir, session) = session();
        session.create_directory("x/y/z").unwrap();
        assert!(dir.path().join("x/y/z").is_dir());
    }

    #[test]
    fn delete_file_and_missing_file() {
        let (dir, session) = session();
        fs::write(dir.path().join("a.txt"), "").unwrap();

        session.delete_file("a.txt").unwrap();
        assert!(!dir.path().join("a.txt").exists());

        let err = session.delete_file("a.txt").unwrap_err();
        assert_eq!(err.to_string(), "File a.txt does not exist");
    }

    #[test]
    fn delete_directory_is_recursive() {
        let (dir, session) = session();
        fs::create_dir_all(dir.path().join("d/e")).unwrap();
        fs::write(dir.path().join("d/e/f.txt"), "x").unwrap();

        session.delete_directory("d").unwrap();
        assert!(!dir.path().join("d").exists());

        let err = session.delete_directory("d").unwrap_err();
        assert_eq!(err.to_string(), "Directory d does not exist");
    }

    #[test]
    fn rename_file_moves_it() {
        let (dir, session) = session();
        fs::write(dir.path().join("old.txt"), "x").unwrap();

        session.rename_file("old.txt", "new.txt").unwrap();
        assert!(!dir.path().join("old.txt").exists());
        assert!(dir.path().join("new.txt").is_file());
    }

    #[test]
    fn rename_file_never_overwrites() {
        let (dir, session) = session();
        fs::write(dir.path().join("old.txt"), "old").unwrap();
        fs::write(dir.path().join("new.txt"), "new").unwrap();

        let err = session.rename_file("old.txt", "new.txt").unwrap_err();
        assert_eq!(err.to_string(), "File new.txt already exists");
        assert_eq!(fs::read_to_string(dir.path().join("old.txt")).unwrap(), "old");
        assert_eq!(fs::read_to_string(dir.path().join("new.txt")).unwrap(), "new");
    }

    #[test]
    fn rename_missing_file() {
        let (_dir, session) = session();
        let err = session.rename_file("old.txt", "new.txt").unwrap_err();
        assert_eq!(err.to_string(), "File old.txt does not exist");
    }

    #[test]
    fn rename_directory_cases() {
        let (dir, session) = session();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();

        let err = session.rename_directory("a", "b").unwrap_err();
        assert_eq!(err.to_string(), "Directory b already exists");

        let err = session.rename_directory("missing", "c").unwrap_err();
        assert_eq!(err.to_string(), "Directory missing does not exist");

        session.rename_directory("a", "c").unwrap();
        assert!(dir.path().join("c").is_dir());
        assert!(!dir.path().join("a").exists());
    }

    #[test]
    fn directory_size_sums_subtree() {
        let (dir, session) = session();
        fs::create_dir_all(dir.path().join("top/inner")).unwrap();
        fs::write(dir.path().join("top/a"), vec![0u8; 100]).unwrap();
        fs::write(dir.path().join("top/inner/b"), vec![0u8; 24]).unwrap();

        assert_eq!(session.directory_size("top").unwrap(), 124);
        assert_eq!(session.directory_size(".").unwrap(), 124);
    }

    #[test]
    fn directory_size_of_missing_directory() {
        let (_dir, session) = session();
        assert!(session.directory_size("nope").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn directory_size_survives_symlink_cycle() {
        let (dir, session) = session();
        fs::create_dir(dir.path().join("loop")).unwrap();
        fs::write(dir.path().join("loop/f"), vec![0u8; 10]).unwrap();
        std::os::unix::fs::symlink(dir.path().join("loop"), dir.path().join("loop/back")).unwrap();

        assert_eq!(session.directory_size("loop").unwrap(), 10);
    }
}
