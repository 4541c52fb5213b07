//! Configuration loading and typed config structures for TerraPet.
//!
//! The configuration lives in `terrapet-config.yaml`. Every field has a
//! serde default, so a missing file or an empty document yields a working
//! configuration that talks to NASA GISS and keeps progress in memory.
//!
//! Environment variables override the file:
//! - `DATABASE_URL` overrides `database.url`
//! - `TERRAPET_HOST` overrides `server.host`
//! - `TERRAPET_PORT` overrides `server.port`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use terrapet_climate::parse::CO2_HEADER_LINES;
use terrapet_climate::{
    ClimateClientConfig, ClimateError, ClimateSource, DEFAULT_CO2_URL, DEFAULT_TEMPERATURE_URL,
};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unusable value.
    #[error("invalid value for {name}: {reason}")]
    InvalidOverride {
        /// The environment variable.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level TerraPet configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TerrapetConfig {
    /// HTTP listener and static assets.
    #[serde(default)]
    pub server: HttpConfig,

    /// Upstream climate datasets.
    #[serde(default)]
    pub climate: ClimateConfig,

    /// Progress persistence.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TerrapetConfig {
    /// Load configuration from a YAML file, then apply environment overrides.
    ///
    /// A missing file is not an error: defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] if an environment override is bad.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Read and parse a YAML file without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `TERRAPET_PORT` is not a
    /// valid port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = Some(url);
        }
        if let Some(host) = lookup("TERRAPET_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TERRAPET_PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::InvalidOverride {
                name: "TERRAPET_PORT",
                reason: format!("{e}"),
            })?;
        }
        Ok(())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding `index.html` and other front-end assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Climate dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClimateConfig {
    /// URL of the annual CO2 text series.
    #[serde(default = "default_co2_url")]
    pub co2_url: String,

    /// URL of the temperature anomaly CSV.
    #[serde(default = "default_temperature_url")]
    pub temperature_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Header lines preceding data in the CO2 series.
    #[serde(default = "default_co2_header_lines")]
    pub co2_header_lines: usize,

    /// Seconds to reuse a successful reading. Zero re-fetches every time.
    #[serde(default)]
    pub cache_ttl_secs: u64,

    /// Skip the network and always use the fallback constants.
    #[serde(default)]
    pub offline: bool,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            co2_url: default_co2_url(),
            temperature_url: default_temperature_url(),
            request_timeout_ms: default_request_timeout_ms(),
            co2_header_lines: default_co2_header_lines(),
            cache_ttl_secs: 0,
            offline: false,
        }
    }
}

impl ClimateConfig {
    /// Settings for the live NASA client.
    pub fn client_config(&self) -> ClimateClientConfig {
        ClimateClientConfig {
            co2_url: self.co2_url.clone(),
            temperature_url: self.temperature_url.clone(),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            co2_header_lines: self.co2_header_lines,
            cache_ttl: Duration::from_secs(self.cache_ttl_secs),
        }
    }

    /// Build the climate source this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::Client`] if the HTTP client cannot be built.
    pub fn build_source(&self) -> Result<ClimateSource, ClimateError> {
        if self.offline {
            return Ok(ClimateSource::fallback());
        }
        ClimateSource::nasa(&self.client_config())
    }
}

/// Progress persistence configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` URL. When absent, progress is kept in memory.
    #[serde(default)]
    pub url: Option<String>,

    /// Maximum pool connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Text,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (required by serde)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_co2_url() -> String {
    DEFAULT_CO2_URL.to_owned()
}

fn default_temperature_url() -> String {
    DEFAULT_TEMPERATURE_URL.to_owned()
}

const fn default_request_timeout_ms() -> u64 {
    10_000
}

const fn default_co2_header_lines() -> usize {
    CO2_HEADER_LINES
}

const fn default_max_connections() -> u32 {
    10
}

fn default_log_level() -> String {
    String::from("info")
}
