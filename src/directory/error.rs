//! directory::error
//!
//! Outcome taxonomy for directory operations.
//!
//! Every host failure is classified into one [`OpError`] variant. The
//! `Display` output of each variant is the exact message shown to the user.

use std::io;

use thiserror::Error;

use crate::core::types::{Action, EntryKind};

/// Failure of a directory operation.
#[derive(Debug, Error)]
pub enum OpError {
    /// The target was required to exist but does not.
    #[error("{} {name} does not exist", .kind.title())]
    NotFound { kind: EntryKind, name: String },

    /// The target was required not to exist but does.
    #[error("{} {name} already exists", .kind.title())]
    AlreadyExists { kind: EntryKind, name: String },

    /// The host denied access.
    #[error("Could not {action} {kind} {name}: access denied")]
    AccessDenied {
        action: Action,
        kind: EntryKind,
        name: String,
    },

    /// The name is structurally invalid for the host.
    #[error("Invalid path or {kind} name: {name}")]
    InvalidPath { kind: EntryKind, name: String },

    /// Any other host failure.
    #[error("Could not {action} {kind} {name}")]
    Failed {
        action: Action,
        kind: EntryKind,
        name: String,
        source: io::Error,
    },

    /// `cd` target is not an existing directory.
    #[error("No such directory: {0}")]
    NoSuchDirectory(String),
}

impl OpError {
    pub fn not_found(kind: EntryKind, name: &str) -> Self {
        OpError::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    pub fn already_exists(kind: EntryKind, name: &str) -> Self {
        OpError::AlreadyExists {
            kind,
            name: name.to_string(),
        }
    }

    /// Classify a host I/O error raised while performing `action` on `name`.
    ///
    /// `NotFound` is only reported as a missing target for reads and
    /// deletes; while creating or renaming it means a missing parent and
    /// falls through to the generic failure.
    pub fn classify(err: io::Error, action: Action, kind: EntryKind, name: &str) -> Self {
        let name = name.to_string();
        match err.kind() {
            io::ErrorKind::NotFound if matches!(action, Action::Fetch | Action::Delete) => {
                OpError::NotFound { kind, name }
            }
            io::ErrorKind::AlreadyExists => OpError::AlreadyExists { kind, name },
            io::ErrorKind::PermissionDenied => OpError::AccessDenied { action, kind, name },
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidFilename => {
                OpError::InvalidPath { kind, name }
            }
            _ => OpError::Failed {
                action,
                kind,
                name,
                source: err,
            },
        }
    }
}
