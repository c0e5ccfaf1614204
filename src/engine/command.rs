//! engine::command
//!
//! Verb lookup, arity rules and `ls` flag parsing.
//!
//! Everything here is pure: nothing touches the filesystem, so parse errors
//! are always reported before any host access.

use crate::core::list::OrderedList;

/// A recognized command verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Ls,
    Cd,
    File,
    Sfile,
    Mkdir,
    Touch,
    Rmdir,
    Rmfile,
    Rndir,
    Rnfile,
    Help,
}

impl Verb {
    /// Look up a verb by its token.
    pub fn parse(token: &str) -> Option<Verb> {
        let verb = match token {
            "ls" => Verb::Ls,
            "cd" => Verb::Cd,
            "file" => Verb::File,
            "sfile" => Verb::Sfile,
            "mkdir" => Verb::Mkdir,
            "touch" => Verb::Touch,
            "rmdir" => Verb::Rmdir,
            "rmfile" => Verb::Rmfile,
            "rndir" => Verb::Rndir,
            "rnfile" => Verb::Rnfile,
            "help" => Verb::Help,
            _ => return None,
        };
        Some(verb)
    }

    /// Exact token count (verb included) and the usage message returned on
    /// a mismatch. `None` for verbs whose arguments are not counted.
    pub fn arity(&self) -> Option<(usize, &'static str)> {
        let checked = match self {
            Verb::Ls | Verb::Help => return None,
            Verb::Cd => (2, "Invalid command, try: cd [directory_name]"),
            Verb::File => (2, "Invalid command, try: file [file_name]"),
            Verb::Sfile => (3, "Invalid command, try: sfile [file_name] [substring]"),
            Verb::Mkdir => (2, "Invalid command, try: mkdir [directory_name]"),
            Verb::Touch => (2, "Invalid command, try: touch [file_name]"),
            Verb::Rmdir => (2, "Invalid command, try: rmdir [directory_name]"),
            Verb::Rmfile => (2, "Invalid command, try: rmfile [file_name]"),
            Verb::Rndir => (
                3,
                "Invalid command, try: rndir [directory_name] [new_directory_name]",
            ),
            Verb::Rnfile => (3, "Invalid command, try: rnfile [file_name] [new_file_name]"),
        };
        Some(checked)
    }
}

/// Flags accepted by `ls`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFlags {
    /// `-nh`: drop hidden entries
    pub no_hidden: bool,
    /// `-s`: sort by name, ascending
    pub sort: bool,
    /// `-sd`: sort by name, descending (applied after `-s`)
    pub sort_descending: bool,
    /// `-f`: full information
    pub full: bool,
}

impl ListFlags {
    /// Parse the tokens after `ls`.
    ///
    /// Returns the first unknown token as the error. Repeated flags are
    /// accepted.
    pub fn parse(tokens: &[String]) -> Result<ListFlags, String> {
        let mut flags = ListFlags::default();
        for token in tokens {
            match token.as_str() {
                "-nh" => flags.no_hidden = true,
                "-s" => flags.sort = true,
                "-sd" => flags.sort_descending = true,
                "-f" => flags.full = true,
                other => return Err(other.to_string()),
            }
        }
        Ok(flags)
    }
}

/// Command reference printed by `help`.
///
/// `preview_chars` is the truncation length `file` uses in this session.
pub fn help_text(preview_chars: usize) -> String {
    format!(
        "\
ls - list the current directory contents
\t-s - sort by name, ascending
\t-sd - sort by name, descending
\t-nh - hide hidden files
\t-f - show full information about a file or a directory
cd [directory_name] - move into said directory
file [file_name] - show contents of a file (<= {preview_chars} characters)
sfile [file_name] [substring] - show whether a file contains a substring
mkdir [directory_name] - create directory
touch [file_name] - create file
rmdir [directory_name] - delete directory
rmfile [file_name] - delete file
rndir [directory_name] [new_directory_name] - rename/move directory
rnfile [file_name] [new_file_name] - rename/move file
exit - end the session"
    )
}

/// Check the token count for `verb`, returning the usage message on mismatch.
pub fn check_arity(verb: Verb, tokens: &OrderedList<String>) -> Result<(), &'static str> {
    match verb.arity() {
        Some((expected, usage)) if tokens.len() != expected => Err(usage),
        _ => Ok(()),
    }
}
