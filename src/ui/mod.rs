//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Result printing and the stderr diagnostic channel
//! - [`format`] - Size, timestamp and listing rendering

pub mod format;
pub mod output;
