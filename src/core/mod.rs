//! core
//!
//! Core building blocks for the file manager.
//!
//! # Modules
//!
//! - [`list`] - Ordered result container with comparator sorting
//! - [`tokenizer`] - Command line tokenization with escaped whitespace
//! - [`types`] - Entry snapshots, entry kinds and actions
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Nothing in `core` touches the current-directory session
//! - Snapshots are plain data, captured once and never refreshed

pub mod config;
pub mod list;
pub mod tokenizer;
pub mod types;
