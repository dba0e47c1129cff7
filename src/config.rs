//! Application configuration.
//!
//! Centralizes the constants used throughout the application and the
//! [`Config`] loaded from disk at startup (JSON or TOML).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "tarsh";

/// Host name shown in the prompt.
pub const PROMPT_HOST: &str = "shell";

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Path separator used by canonical VFS paths.
pub const SEPARATOR: char = '/';

/// Token that always names the root directory.
pub const ROOT_ALIAS: &str = "~";

/// Archive extensions read without decompression.
pub const TAR_EXTENSIONS: &[&str] = &[".tar"];

/// Archive extensions read through a gzip decoder.
pub const GZIP_TAR_EXTENSIONS: &[&str] = &[".tar.gz", ".tgz"];

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Text returned by `exit`; the front end stops when it sees it.
pub const EXIT_SENTINEL: &str = "exit";

/// Calendar defaults for `cal` without arguments.
pub mod calendar {
    /// Year rendered by a bare `cal`.
    pub const DEFAULT_YEAR: i32 = 2024;
    /// Month rendered by a bare `cal`.
    pub const DEFAULT_MONTH: u32 = 11;
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Month shown by a bare `cal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl Default for CalendarMonth {
    fn default() -> Self {
        Self {
            year: calendar::DEFAULT_YEAR,
            month: calendar::DEFAULT_MONTH,
        }
    }
}

/// Settings loaded from the config file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Returned verbatim by `whoami`.
    pub username: String,
    /// Location of the archive snapshot.
    pub vfs_path: PathBuf,
    /// Root directory inside the archive. Defaults to the first top-level
    /// directory.
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub calendar: CalendarMonth,
}

impl Config {
    /// Load a config file, picking the format from its extension.
    ///
    /// A relative `vfs_path` is resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let parse: fn(&str) -> Result<Self, ConfigError> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => Self::from_json_str,
                Some("toml") => Self::from_toml_str,
                _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
            };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = parse(&text)?;

        if config.vfs_path.is_relative()
            && let Some(dir) = path.parent()
        {
            config.vfs_path = dir.join(&config.vfs_path);
        }

        tracing::debug!(
            config = %path.display(),
            username = %config.username,
            vfs_path = %config.vfs_path.display(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
