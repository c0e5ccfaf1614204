//! dirshell - an interactive, shell-like file manager
//!
//! A read-process-print loop that accepts line commands (`ls`, `cd`, `file`,
//! `sfile`, `mkdir`, `touch`, `rmdir`, `rmfile`, `rndir`, `rnfile`, `help`)
//! and navigates, inspects and mutates a directory tree.
//!
//! # Architecture
//!
//! - [`cli`] - Process layer: arguments, configuration, the prompt loop
//! - [`engine`] - Tokenize, validate and dispatch one command line
//! - [`directory`] - Session with the current directory and all host operations
//! - [`core`] - Ordered list, tokenizer, entry snapshots, configuration
//! - [`ui`] - Diagnostic output and listing/size formatting
//!
//! # Correctness Invariants
//!
//! 1. Parse errors are reported before any filesystem access
//! 2. Every command yields a single outcome string; empty means success
//! 3. Create, delete and rename never overwrite or partially apply
//! 4. The current directory only moves on a successful `cd`

pub mod cli;
pub mod core;
pub mod directory;
pub mod engine;
pub mod ui;
