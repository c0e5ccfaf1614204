//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$DIRSHELL_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/dirshell/config.toml`
//! 3. `~/.dirshell/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use dirshell::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Preview: {} chars", config.preview_chars());
//! println!("Time format: {}", config.time_format());
//! ```

pub mod schema;

pub use schema::{ShellConfig, DEFAULT_PREVIEW_CHARS, DEFAULT_TIME_FORMAT};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values from the config file
    pub shell: ShellConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed or
    /// validated. A missing file is not an error (defaults are used).
    pub fn load() -> Result<Config, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let shell: ShellConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        shell.validate()?;

        Ok(Config {
            shell,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap already-parsed values that did not come from a file.
    pub fn from_shell(shell: ShellConfig) -> Config {
        Config { shell, path: None }
    }

    fn find_config_file() -> Option<PathBuf> {
        // 1. Check $DIRSHELL_CONFIG
        if let Ok(path) = std::env::var("DIRSHELL_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/dirshell/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("dirshell/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.dirshell/config.toml
        dirs::home_dir()
            .map(|home| home.join(".dirshell/config.toml"))
            .filter(|path| path.exists())
    }

    /// Path of the file the config was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Configured start directory, if any.
    pub fn start_dir(&self) -> Option<&Path> {
        self.shell.start_dir.as_deref()
    }

    /// Number of characters `file` prints.
    ///
    /// Defaults to 200 if not configured.
    pub fn preview_chars(&self) -> usize {
        self.shell.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS)
    }

    /// strftime pattern for full listings.
    ///
    /// Defaults to `%Y-%m-%d %H:%M:%S` if not configured.
    pub fn time_format(&self) -> &str {
        self.shell
            .time_format
            .as_deref()
            .unwrap_or(DEFAULT_TIME_FORMAT)
    }
}
