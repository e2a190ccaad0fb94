//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {}: {reason}", path.display())]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {}: {reason}", path.display())]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to hardcoded defaults.
/// Corresponds to `~/.config/treetab/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Indentation in cells per nesting level.
    #[serde(default)]
    pub indent_width: Option<u16>,

    /// Start with every branch expanded.
    #[serde(default)]
    pub expand_all: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Indentation in cells per nesting level.
    pub indent_width: u16,
    /// Start with every branch expanded.
    pub expand_all: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            expand_all: false,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// `~/.local/state/treetab/treetab.log` on Unix-like systems, the platform
/// equivalent elsewhere. The TUI owns the terminal, so logs always go to a
/// file the user can `tail -f`.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("treetab").join("treetab.log")
    } else {
        PathBuf::from("treetab.log")
    }
}

/// Resolve default config file path.
///
/// `~/.config/treetab/config.toml` on Unix, the platform equivalent
/// elsewhere. `None` if the home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("treetab").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error, defaults are
/// used). Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TREETAB_CONFIG` environment variable
/// 3. Default path `~/.config/treetab/config.toml`
///
/// Missing config files are NOT errors; defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("TREETAB_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create the resolved config.
///
/// For each field, `Some(value)` from the file wins over the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        indent_width: config.indent_width.unwrap_or(defaults.indent_width),
        expand_all: config.expand_all.unwrap_or(defaults.expand_all),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to a resolved config.
///
/// Checks for:
/// - `TREETAB_INDENT_WIDTH`: indentation per level (ignored unless it
///   parses as a number)
/// - `TREETAB_EXPAND_ALL`: "1"/"true" to start expanded
/// - `TREETAB_LOG_FILE`: log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(width) = std::env::var("TREETAB_INDENT_WIDTH") {
        if let Ok(width) = width.parse::<u16>() {
            config.indent_width = width;
        }
    }

    if let Ok(expand) = std::env::var("TREETAB_EXPAND_ALL") {
        config.expand_all = matches!(expand.as_str(), "1" | "true" | "TRUE");
    }

    if let Ok(path) = std::env::var("TREETAB_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }

    config
}

/// Apply CLI argument overrides to a resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only overrides flags the user explicitly set.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    indent_override: Option<u16>,
    expand_all_override: Option<bool>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(indent) = indent_override {
        config.indent_width = indent;
    }
    if let Some(expand_all) = expand_all_override {
        config.expand_all = expand_all;
    }
    if let Some(log_file) = log_file_override {
        config.log_file_path = log_file;
    }
    config
}
