//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing: `preview_chars` must be positive and
//! `time_format` must be a valid strftime pattern.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default `file` truncation length in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Default timestamp pattern for full listings.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// User configuration.
///
/// # Example
///
/// ```toml
/// start_dir = "/home/me/projects"
/// preview_chars = 200
/// time_format = "%d.%m.%Y %H:%M"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Directory a new session starts in
    pub start_dir: Option<PathBuf>,

    /// Number of characters `file` prints
    pub preview_chars: Option<usize>,

    /// strftime pattern for timestamps in `ls -f`
    pub time_format: Option<String>,
}

impl ShellConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preview_chars == Some(0) {
            return Err(ConfigError::InvalidValue(
                "preview_chars must be greater than 0".into(),
            ));
        }

        if let Some(format) = &self.time_format {
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid time_format '{}'",
                    format
                )));
            }
        }

        Ok(())
    }
}
