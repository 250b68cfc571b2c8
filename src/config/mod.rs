//! TOML-based configuration.
//!
//! Loaded from `schemadoc.toml` (or a `--config` override). Every section
//! has sensible defaults; a missing file is the same as an empty one.
//!
//! Example configuration:
//! ```toml
//! [tables]
//! ignore = ["sessions", "cache"]
//! ignore_regex = "^tmp_"
//!
//! [migrations]
//! table = "migration"
//!
//! [display]
//! sentinel_lengths = ["65535", "16777215", "4294967295"]
//!
//! [database]
//! sqlite = "${APP_DB_PATH}"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_SENTINEL_LENGTHS;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "schemadoc.toml";

/// Error type for configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid ignore_regex: {0}")]
    InvalidIgnoreRegex(#[from] regex::Error),

    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Table filtering.
    pub tables: TableFilterConfig,

    /// Migration-tracking table.
    pub migrations: MigrationConfig,

    /// Display tuning.
    pub display: DisplayConfig,

    /// Default catalog source (CLI flags override).
    pub database: DatabaseConfig,
}

/// Which tables to leave out of the documentation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TableFilterConfig {
    /// Exact table names to skip (case-sensitive).
    pub ignore: Vec<String>,

    /// Regex; matching table names are skipped.
    pub ignore_regex: Option<String>,
}

/// Migration-tracking table settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Name of the migration-tracking table.
    pub table: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            table: "migration".to_string(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Length values treated as "unspecified" and suppressed. Defaults to
    /// the MySQL text/blob storage widths.
    pub sentinel_lengths: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sentinel_lengths: DEFAULT_SENTINEL_LENGTHS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Catalog source settings. Paths support `${ENV_VAR}` expansion.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file.
    pub sqlite: Option<String>,

    /// JSON catalog snapshot file.
    pub snapshot: Option<String>,
}

impl Config {
    /// Load configuration from an explicit path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load `schemadoc.toml` from the working directory, or defaults when
    /// the file does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Compile the ignore regex, if configured.
    pub fn ignore_regex(&self) -> Result<Option<Regex>, ConfigError> {
        match self.tables.ignore_regex.as_deref() {
            Some(pattern) if !pattern.is_empty() => Ok(Some(Regex::new(pattern)?)),
            _ => Ok(None),
        }
    }

    /// SQLite path with environment variables expanded.
    pub fn sqlite_path(&self) -> Result<Option<String>, ConfigError> {
        self.database
            .sqlite
            .as_deref()
            .map(expand_env_vars)
            .transpose()
    }

    /// Snapshot path with environment variables expanded.
    pub fn snapshot_path(&self) -> Result<Option<String>, ConfigError> {
        self.database
            .snapshot
            .as_deref()
            .map(expand_env_vars)
            .transpose()
    }
}

/// Expand `${VAR}` references from the process environment.
pub fn expand_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return Ok(result);
        };
        let name = &after[..end];
        let value =
            env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;
        result.push_str(&value);
        rest = &after[end + 1..];
    }
    result.push_str(rest);
    Ok(result)
}
