//! cli::repl
//!
//! The read-process-print loop around [`Shell`].
//!
//! Prints `<current dir>: ` as the prompt (unless quiet), reads one line,
//! prints the non-empty outcome. `exit` or end of input ends the loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::engine::Shell;
use crate::ui::output::{self, Verbosity};

/// Run the loop until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    shell: &mut Shell,
    input: R,
    mut out: W,
    verbosity: Verbosity,
) -> Result<()> {
    let prompt = verbosity != Verbosity::Quiet;
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "{}: ", shell.session().current_dir().display())?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            if prompt {
                writeln!(out)?;
            }
            break;
        };
        let line = line.context("failed to read command")?;

        if line.trim() == "exit" {
            output::debug("exit requested", verbosity);
            break;
        }

        let result = shell.resolve(&line);
        if !result.is_empty() {
            writeln!(out, "{}", result)?;
        }
    }

    Ok(())
}
