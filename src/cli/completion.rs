//! cli::completion
//!
//! Shell completion scripts for the `dsh` binary.

use std::io::Write;

use crate::cli::args::{Cli, CompletionShell};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};

/// Write a completion script for `shell` to `out`.
pub fn completion(shell: CompletionShell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut cmd, &name, out),
        CompletionShell::Zsh => generate(shells::Zsh, &mut cmd, &name, out),
        CompletionShell::Fish => generate(shells::Fish, &mut cmd, &name, out),
        CompletionShell::PowerShell => generate(shells::PowerShell, &mut cmd, &name, out),
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_names_binary() {
        let mut out = Vec::new();
        completion(CompletionShell::Bash, &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("dsh"));
        assert!(script.contains("--cwd"));
    }
}
