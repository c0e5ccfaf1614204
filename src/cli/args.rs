//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Start the session in this directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: No prompt, no warnings
//! - `--command` / `-c <line>`: Run a command line and exit
//! - `--completions <shell>`: Print a completion script and exit

use clap::Parser;
use std::path::PathBuf;

/// dsh - an interactive shell-like file manager
#[derive(Parser, Debug)]
#[command(name = "dsh")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
SESSION COMMANDS:
    ls [-nh] [-s] [-sd] [-f]     list the current directory
    cd <dir>                     change directory
    file <file>                  show the start of a file
    sfile <file> <substring>     check a file for a substring
    mkdir <dir> / touch <file>   create
    rmdir <dir> / rmfile <file>  delete
    rndir / rnfile <old> <new>   rename or move

    Escape spaces in names with a backslash: touch my\\ notes.txt

EXAMPLES:
    # Interactive session starting in your home directory
    dsh --cwd ~

    # One-shot commands
    dsh --cwd . -c 'mkdir build' -c 'ls -s'")]
pub struct Cli {
    /// Start the session in this directory
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// No prompt and no warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Run a command line and exit; may be repeated
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<CompletionShell>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
