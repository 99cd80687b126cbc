//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.caretlink/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::SplitDirection;
use crate::core::navigator::{NavigatorOptions, WindowStrategy};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CaretConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub split: Option<SplitDirection>,
    pub window_strategy: Option<WindowStrategy>,
    pub restore_on_missing_window: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

/// Overrides taken from the command line (None = flag not given).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub split: Option<SplitDirection>,
    pub window_strategy: Option<WindowStrategy>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE_NAME: &str = "caretlink.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub split: SplitDirection,
    pub window_strategy: WindowStrategy,
    pub restore_on_missing_window: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl ResolvedConfig {
    pub fn navigator_options(&self) -> NavigatorOptions {
        NavigatorOptions {
            window_strategy: self.window_strategy,
            restore_on_missing_window: self.restore_on_missing_window,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.caretlink`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".caretlink"))
}

/// Returns the path to `~/.caretlink/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.caretlink/config.toml`.
pub fn load_config() -> Result<CaretConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(CaretConfig::default())
        }
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CaretConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<CaretConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CaretConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CaretConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# caretlink configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# split = "vertical"                 # "vertical" or "horizontal" (CARETLINK_SPLIT)
# window_strategy = "cycle"          # "cycle" or "direct" (CARETLINK_WINDOW_STRATEGY)
# restore_on_missing_window = false  # keep the breadcrumb when going back fails

# [logging]
# level = "info"                     # off, error, warn, info, debug, trace (CARETLINK_LOG)
# file = "/home/me/.caretlink/caretlink.log"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CaretConfig, cli: CliOverrides) -> ResolvedConfig {
    // Split: CLI → env → config → default
    let split = cli
        .split
        .or_else(|| env_value("CARETLINK_SPLIT"))
        .or(config.general.split)
        .unwrap_or_default();

    // Window strategy: CLI → env → config → default
    let window_strategy = cli
        .window_strategy
        .or_else(|| env_value("CARETLINK_WINDOW_STRATEGY"))
        .or(config.general.window_strategy)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = std::env::var("CARETLINK_LOG")
        .ok()
        .or_else(|| config.logging.level.clone())
        .and_then(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config_dir().map(|d| d.join(DEFAULT_LOG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_NAME));

    ResolvedConfig {
        split,
        window_strategy,
        restore_on_missing_window: config.general.restore_on_missing_window.unwrap_or(false),
        log_level,
        log_file,
    }
}

/// Reads an enum-valued env var using the same spelling as the CLI flag.
fn env_value<T: ValueEnum>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match T::from_str(&raw, true) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {name}={raw}: {e}");
            None
        }
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{s}', using default");
            None
        }
    }
}
