//! ui::format
//!
//! Rendering of sizes, timestamps and directory listings.
//!
//! # Listings
//!
//! Directories are always rendered before files. Name-only listings mark
//! directories with a trailing path separator. Full listings add indented
//! detail lines; files show size, creation and last-write time, directories
//! show creation, last-write and last-access time.

use std::fmt::Write;
use std::path::MAIN_SEPARATOR;

use chrono::{DateTime, Local};

use crate::core::config::DEFAULT_TIME_FORMAT;
use crate::core::list::OrderedList;
use crate::core::types::{DirectoryEntry, FileEntry};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count for humans.
///
/// # Example
///
/// ```
/// use dirshell::ui::format::format_size;
///
/// assert_eq!(format_size(1), "1 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(-10), "0 B");
/// ```
pub fn format_size(bytes: i64) -> String {
    if bytes < 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Format an optional timestamp with a strftime pattern.
///
/// Missing timestamps render as `unknown`. A pattern chrono cannot render
/// falls back to the default pattern.
pub fn format_time(time: Option<&DateTime<Local>>, pattern: &str) -> String {
    let Some(time) = time else {
        return "unknown".to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", time.format(DEFAULT_TIME_FORMAT));
    }
    out
}

/// Render a name-only listing.
pub fn render_names(
    directories: &OrderedList<DirectoryEntry>,
    files: &OrderedList<FileEntry>,
) -> String {
    let mut lines = Vec::with_capacity(directories.len() + files.len());

    for dir in directories {
        lines.push(format!("{}{}", dir.name, MAIN_SEPARATOR));
    }
    for file in files {
        lines.push(file.name.clone());
    }

    lines.join("\n")
}

/// Render a full-information listing.
pub fn render_full(
    directories: &OrderedList<DirectoryEntry>,
    files: &OrderedList<FileEntry>,
    time_format: &str,
) -> String {
    let mut lines = Vec::new();

    for dir in directories {
        lines.push(format!("{}{}", dir.name, MAIN_SEPARATOR));
        lines.push(format!(
            "\t-time created: {}",
            format_time(dir.times.created.as_ref(), time_format)
        ));
        lines.push(format!(
            "\t-time last edited: {}",
            format_time(dir.times.modified.as_ref(), time_format)
        ));
        lines.push(format!(
            "\t-time last accessed: {}",
            format_time(dir.times.accessed.as_ref(), time_format)
        ));
    }

    for file in files {
        lines.push(file.name.clone());
        lines.push(format!(
            "\t-file size: {}",
            format_size(i64::try_from(file.len).unwrap_or(i64::MAX))
        ));
        lines.push(format!(
            "\t-time created: {}",
            format_time(file.times.created.as_ref(), time_format)
        ));
        lines.push(format!(
            "\t-time last edited: {}",
            format_time(file.times.modified.as_ref(), time_format)
        ));
    }

    lines.join("\n")
}
