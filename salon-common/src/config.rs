//! Configuration loading and root folder resolution
//!
//! Bootstrap settings come from a TOML file. Values resolve in this order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing config file is not an error: the defaults are used and a
//! warning is logged. A file that exists but does not parse is an error.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the config file
pub const CONFIG_FILE_ENV: &str = "SALON_CONFIG";

/// Environment variable naming the root folder
pub const ROOT_FOLDER_ENV: &str = "SALON_ROOT_FOLDER";

/// Database file name inside the root folder
pub const DEFAULT_DATABASE_FILE: &str = "salon.db";

/// Report file name inside the root folder
pub const DEFAULT_REPORT_FILE: &str = "salon_report.json";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TomlConfig {
    /// Folder holding the database and the default report location
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    /// Explicit database file; defaults to `<root_folder>/salon.db`
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportConfig,

    /// Service price overrides keyed by service label
    #[serde(default)]
    pub prices: BTreeMap<String, f64>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Reporting tool configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Where the JSON report is written; defaults to `<root_folder>/salon_report.json`
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            root_folder: None,
            database_path: None,
            bind_addr: default_bind_addr(),
            port: default_port(),
            logging: LoggingConfig::default(),
            report: ReportConfig::default(),
            prices: BTreeMap::new(),
        }
    }
}

impl TomlConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Locate and load the config file, falling back to defaults
    ///
    /// An explicitly requested file (CLI or environment) must exist.
    /// The per-user default location is optional. Nothing is logged here;
    /// report the returned [`ConfigSource`] once the subscriber is installed.
    pub fn load_or_default(cli_path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit_config_path(cli_path) {
            let config = Self::load(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        match user_config_path() {
            Some(path) if path.exists() => {
                let config = Self::load(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Database file for the given root folder
    pub fn database_path(&self, root_folder: &Path) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| root_folder.join(DEFAULT_DATABASE_FILE))
    }

    /// Report output file for the given root folder
    pub fn report_path(&self, root_folder: &Path) -> PathBuf {
        self.report
            .output_path
            .clone()
            .unwrap_or_else(|| root_folder.join(DEFAULT_REPORT_FILE))
    }

    /// `host:port` string for the HTTP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Where the loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No config file found; compiled defaults in use
    Defaults,
}

impl ConfigSource {
    /// Log the config origin; call after the tracing subscriber is installed
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Defaults => warn!("No config file found, using defaults"),
        }
    }
}

fn explicit_config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from)
}

/// Per-user config file location (`~/.config/salon/config.toml` on Linux)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("salon").join("config.toml"))
}

/// Resolve the root folder: CLI, then environment, then TOML, then OS default
pub fn resolve_root_folder(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.root_folder {
        return path.clone();
    }

    default_root_folder()
}

/// OS-dependent default root folder
pub fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("salon"))
        .unwrap_or_else(|| PathBuf::from("./salon_data"))
}

/// Create the root folder if it does not exist yet
pub fn ensure_root_folder(root_folder: &Path) -> Result<()> {
    if !root_folder.exists() {
        std::fs::create_dir_all(root_folder)?;
        info!("Created root folder: {}", root_folder.display());
    }
    Ok(())
}
