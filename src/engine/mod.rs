//! engine
//!
//! Command dispatch: raw line in, outcome string out.
//!
//! # Flow
//!
//! ```text
//! line -> tokenize -> verb lookup -> arity / flag check -> Session -> text
//! ```
//!
//! # Outcome strings
//!
//! [`Shell::resolve`] always returns text, never an error. An empty string
//! means the command succeeded with nothing to report. Operation failures
//! are rendered from their [`OpError`] message, parse failures from fixed
//! usage strings.
//!
//! # Example
//!
//! ```
//! use dirshell::engine::Shell;
//! use dirshell::directory::Session;
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let mut shell = Shell::new(Session::new(dir.path()));
//!
//! assert_eq!(shell.resolve("touch notes.txt"), "");
//! assert_eq!(shell.resolve("ls"), "notes.txt");
//! assert_eq!(shell.resolve("ls -a"), "Invalid flag -a");
//! ```

pub mod command;

pub use command::{help_text, ListFlags, Verb};

use crate::core::config::{DEFAULT_PREVIEW_CHARS, DEFAULT_TIME_FORMAT};
use crate::core::list::OrderedList;
use crate::core::tokenizer::tokenize;
use crate::core::types::Entry;
use crate::directory::{OpError, Session};
use crate::ui::format;

/// Dispatcher owning the session it operates on.
#[derive(Debug, Clone)]
pub struct Shell {
    session: Session,
    preview_chars: usize,
    time_format: String,
}

impl Shell {
    /// Create a dispatcher with default preview length and time format.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Number of characters `file` prints.
    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    /// strftime pattern for `ls -f`.
    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    /// The session this shell operates on.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Interpret one input line and return its outcome string.
    pub fn resolve(&mut self, line: &str) -> String {
        if line.is_empty() {
            return String::new();
        }

        let tokens = tokenize(line);
        let Some(first) = tokens.get(0) else {
            return String::new();
        };

        let Some(verb) = Verb::parse(first) else {
            return format!("Invalid command: {}, try help for the list of commands", line);
        };

        if let Err(usage) = command::check_arity(verb, &tokens) {
            return usage.to_string();
        }

        let args = &tokens.as_slice()[1..];
        match verb {
            Verb::Ls => self.list(args),
            Verb::Cd => outcome(self.session.change_directory(&args[0])),
            Verb::File => self.read(&args[0]),
            Verb::Sfile => self.search(&args[0], &args[1]),
            Verb::Mkdir => outcome(self.session.create_directory(&args[0])),
            Verb::Touch => outcome(self.session.create_file(&args[0])),
            Verb::Rmdir => outcome(self.session.delete_directory(&args[0])),
            Verb::Rmfile => outcome(self.session.delete_file(&args[0])),
            Verb::Rndir => outcome(self.session.rename_directory(&args[0], &args[1])),
            Verb::Rnfile => outcome(self.session.rename_file(&args[0], &args[1])),
            Verb::Help => help_text(self.preview_chars),
        }
    }

    fn list(&self, args: &[String]) -> String {
        let flags = match ListFlags::parse(args) {
            Ok(flags) => flags,
            Err(flag) => return format!("Invalid flag {}", flag),
        };

        let mut files = self.session.list_files();
        let mut directories = self.session.list_directories();

        if flags.no_hidden {
            files = filter_hidden(&files);
            directories = filter_hidden(&directories);
        }
        if flags.sort {
            sort_by_name(&mut files);
            sort_by_name(&mut directories);
        }
        if flags.sort_descending {
            sort_by_name_descending(&mut files);
            sort_by_name_descending(&mut directories);
        }

        if flags.full {
            format::render_full(&directories, &files, &self.time_format)
        } else {
            format::render_names(&directories, &files)
        }
    }

    fn read(&self, name: &str) -> String {
        match self.session.read_file(name) {
            Ok(text) => text.chars().take(self.preview_chars).collect(),
            Err(err) => err.to_string(),
        }
    }

    fn search(&self, name: &str, needle: &str) -> String {
        match self.session.search_file(name, needle) {
            Ok(true) => format!("File {} contains substring: {}", name, needle),
            Ok(false) => format!("File {} does not contain substring: {}", name, needle),
            Err(err) => err.to_string(),
        }
    }
}

fn outcome(result: Result<(), OpError>) -> String {
    match result {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Copy of `entries` without hidden ones, order preserved.
pub fn filter_hidden<T: Entry + Clone>(entries: &OrderedList<T>) -> OrderedList<T> {
    entries.filter_out(|entry| entry.is_hidden())
}

/// Sort ascending by case-insensitive ordinal name.
pub fn sort_by_name<T: Entry>(entries: &mut OrderedList<T>) {
    entries.sort_by_swap(|a, b| name_key(a) > name_key(b));
}

/// Sort descending by case-insensitive ordinal name.
pub fn sort_by_name_descending<T: Entry>(entries: &mut OrderedList<T>) {
    entries.sort_by_swap(|a, b| name_key(a) < name_key(b));
}

fn name_key<T: Entry>(entry: &T) -> String {
    entry.name().to_lowercase()
}
