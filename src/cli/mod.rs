//! cli
//!
//! Process layer for the `dsh` binary.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and load configuration
//! - Pick the start directory and build the [`Shell`]
//! - Run one-shot commands or the interactive loop
//!
//! # Architecture
//!
//! The CLI layer is thin. It never touches the filesystem on behalf of a
//! command; every command line goes through [`Shell::resolve`].

pub mod args;
pub mod completion;
pub mod repl;

pub use args::{Cli, CompletionShell};

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::config::Config;
use crate::directory::Session;
use crate::engine::Shell;
use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        return completion::completion(shell, &mut io::stdout());
    }

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    let config = Config::load().context("failed to load configuration")?;
    if let Some(path) = config.path() {
        output::debug(format!("loaded config from {}", path.display()), verbosity);
    }

    let start = start_directory(cli.cwd.as_deref(), &config)?;
    output::debug(format!("starting in {}", start.display()), verbosity);

    let session = Session::new(start).with_verbosity(verbosity);
    let mut shell = Shell::new(session)
        .with_preview_chars(config.preview_chars())
        .with_time_format(config.time_format());

    // One-shot mode: run each line in order, then exit
    if !cli.commands.is_empty() {
        for line in &cli.commands {
            output::result(&shell.resolve(line));
        }
        return Ok(());
    }

    repl::run(&mut shell, io::stdin().lock(), io::stdout().lock(), verbosity)
}

/// Resolve the directory a new session starts in.
///
/// `--cwd` wins over the configured `start_dir`; without either, the session
/// starts at the filesystem root of the process's working directory.
pub fn start_directory(cwd: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = cwd.or(config.start_dir()) {
        let canonical = dir
            .canonicalize()
            .with_context(|| format!("start directory '{}' does not exist", dir.display()))?;
        if !canonical.is_dir() {
            bail!("start directory '{}' is not a directory", dir.display());
        }
        return Ok(canonical);
    }

    let current = std::env::current_dir().context("failed to read the working directory")?;
    Ok(filesystem_root(&current))
}

/// The root a path lives under (`/` or a drive root such as `C:\`).
pub fn filesystem_root(path: &Path) -> PathBuf {
    path.ancestors().last().unwrap_or(path).to_path_buf()
}
