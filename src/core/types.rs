//! core::types
//!
//! Domain types shared by the directory layer, the dispatcher and the
//! formatters.
//!
//! # Types
//!
//! - [`EntryKind`] - File or directory, used in outcome messages
//! - [`Action`] - What an operation was trying to do, used in outcome messages
//! - [`Timestamps`] - Creation / last-write / last-access times
//! - [`DirectoryEntry`] / [`FileEntry`] - Metadata snapshots
//!
//! # Snapshots
//!
//! Entries are captured once at query time and never refreshed. Two snapshots
//! of the same path may disagree with each other and with the live host.

use std::fmt;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Kind of filesystem object an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Capitalized label, used at the start of a sentence.
    pub fn title(&self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}

/// The verb an operation reports when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fetch,
    Create,
    Delete,
    Rename,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Action::Fetch => "fetch",
            Action::Create => "create",
            Action::Delete => "delete",
            Action::Rename => "rename",
        };
        write!(f, "{}", verb)
    }
}

/// Host timestamps. `None` where the host cannot report a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamps {
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
    pub accessed: Option<DateTime<Local>>,
}

impl Timestamps {
    /// Read all three timestamps from host metadata.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            created: local_time(metadata.created()),
            modified: local_time(metadata.modified()),
            accessed: local_time(metadata.accessed()),
        }
    }
}

fn local_time(time: std::io::Result<SystemTime>) -> Option<DateTime<Local>> {
    time.ok().map(DateTime::<Local>::from)
}

/// Common view over directory and file snapshots.
pub trait Entry {
    /// Final path component.
    fn name(&self) -> &str;

    /// Full path at the time of the snapshot.
    fn path(&self) -> &Path;

    /// Whether the host marks this entry hidden.
    fn is_hidden(&self) -> bool;
}

/// Snapshot of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub times: Timestamps,
    pub hidden: bool,
}

impl DirectoryEntry {
    /// Capture a directory snapshot from host metadata.
    pub fn snapshot(path: PathBuf, metadata: &Metadata) -> Self {
        let name = entry_name(&path);
        Self {
            hidden: host_hidden(&name, metadata),
            times: Timestamps::from_metadata(metadata),
            name,
            path,
        }
    }
}

impl Entry for DirectoryEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Snapshot of a regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub len: u64,
    pub times: Timestamps,
    pub hidden: bool,
}

impl FileEntry {
    /// Capture a file snapshot from host metadata.
    pub fn snapshot(path: PathBuf, metadata: &Metadata) -> Self {
        let name = entry_name(&path);
        Self {
            hidden: host_hidden(&name, metadata),
            len: metadata.len(),
            times: Timestamps::from_metadata(metadata),
            name,
            path,
        }
    }
}

impl Entry for FileEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(windows)]
fn host_hidden(_name: &str, metadata: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
}

#[cfg(not(windows))]
fn host_hidden(name: &str, _metadata: &Metadata) -> bool {
    name.starts_with('.')
}
