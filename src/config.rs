//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::sales::GeneratorParams;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_enable_export")]
    pub enable_export: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_enable_export() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_export: default_enable_export(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Synthetic dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_start_year")]
    pub start_year: i32,

    #[serde(default = "default_start_month")]
    pub start_month: u32,

    #[serde(default = "default_periods")]
    pub periods: usize,

    #[serde(default = "default_sales_min")]
    pub sales_min: u32,

    #[serde(default = "default_sales_max")]
    pub sales_max: u32,
}

fn default_seed() -> u64 {
    42
}

fn default_start_year() -> i32 {
    2023
}

fn default_start_month() -> u32 {
    1
}

fn default_periods() -> usize {
    12
}

fn default_sales_min() -> u32 {
    1000
}

fn default_sales_max() -> u32 {
    5000
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            start_year: default_start_year(),
            start_month: default_start_month(),
            periods: default_periods(),
            sales_min: default_sales_min(),
            sales_max: default_sales_max(),
        }
    }
}

impl DatasetConfig {
    pub fn to_params(&self) -> GeneratorParams {
        GeneratorParams {
            seed: self.seed,
            start_year: self.start_year,
            start_month: self.start_month,
            periods: self.periods,
            sales_min: self.sales_min,
            sales_max: self.sales_max,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub fn default_directive(&self) -> String {
        format!("sales_overview={},tower_http=info", self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sales-overview").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/sales-overview/config.toml"));
        paths.push(PathBuf::from("./config.toml"));
        paths
    }

    /// Load from default locations or environment
    ///
    /// Returns the file the config came from, if any. This runs before the
    /// subscriber is installed, so callers log the source themselves.
    pub fn load_default() -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first of `paths` that exists, with environment overrides
    ///
    /// A file that exists but cannot be read or parsed is an error, not a
    /// reason to fall back to defaults.
    pub fn load_first(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Ok((Self::load_with_env(path)?, Some(path.clone()))),
            None => Ok((Self::from_env(), None)),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    ///
    /// Unparseable numeric values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(host) = lookup("SALES_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("SALES_API_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }

        // Dataset overrides
        if let Some(seed) = lookup("SALES_SEED").and_then(|s| s.parse().ok()) {
            self.dataset.seed = seed;
        }

        // Logging overrides
        if let Some(level) = lookup("SALES_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SALES_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Sales Overview Dashboard Configuration
#
# Environment variables override these settings:
# - SALES_API_HOST
# - SALES_API_PORT
# - SALES_SEED
# - SALES_LOG_LEVEL
# - SALES_LOG_FORMAT

[api]
# HTTP server host
host = "0.0.0.0"

# HTTP server port
port = 8501

# Serve the CSV download endpoint
enable_export = true

[dataset]
# Seed for the synthetic sales generator
seed = 42

# First month of data (month-end dates are used)
start_year = 2023
start_month = 1

# Number of consecutive months
periods = 12

# Sales values are drawn from [sales_min, sales_max)
sales_min = 1000
sales_max = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
