//! Application configuration
//!
//! Loads a flat JSON config file and overlays `ROSTER_`-prefixed environment
//! variables on top of it.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::Level;
use validator::Validate;

use crate::telemetry::TracingConfig;

/// Config file read when `ROSTER_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "conf.json";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_VAR: &str = "ROSTER_CONFIG";

/// Prefix of environment variables that override file values
pub const ENV_PREFIX: &str = "ROSTER";

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    /// Bearer token for the Clash of Clans API
    #[validate(length(min = 1, message = "coc_token must not be empty"))]
    pub coc_token: String,

    /// Clan whose roster is mirrored, with or without the leading `#`
    #[serde(alias = "clant_id")]
    #[validate(length(min = 1, message = "clan_tag must not be empty"))]
    pub clan_tag: String,

    #[serde(default = "default_coc_api_base")]
    pub coc_api_base: String,

    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, message = "coc_timeout_secs must be at least 1"))]
    pub coc_timeout_secs: u64,

    /// Integration token for the Notion API
    #[validate(length(min = 1, message = "notion_token must not be empty"))]
    pub notion_token: String,

    #[serde(default)]
    pub notion_db_prod: String,

    #[serde(default)]
    pub notion_db_test: String,

    #[serde(default = "default_notion_api_base")]
    pub notion_api_base: String,

    #[serde(default = "default_notion_version")]
    pub notion_version: String,

    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, message = "notion_timeout_secs must be at least 1"))]
    pub notion_timeout_secs: u64,

    /// Directory receiving pre-sync snapshots
    #[serde(default = "default_saves_dir")]
    pub saves_dir: PathBuf,

    /// Directory receiving `trace.log`
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON records on stdout instead of plain text
    #[serde(default)]
    pub log_json: bool,
}

/// Which database a run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Prod,
    Test,
}

impl Mode {
    /// Config key holding the database id for this mode
    #[must_use]
    pub fn database_key(self) -> &'static str {
        match self {
            Self::Prod => "notion_db_prod",
            Self::Test => "notion_db_test",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Test => "test",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" => Ok(Self::Prod),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Default value functions
fn default_coc_api_base() -> String {
    "https://api.clashofclans.com/v1".to_string()
}

fn default_notion_api_base() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_notion_version() -> String {
    "2021-08-16".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_saves_dir() -> PathBuf {
    PathBuf::from("saves")
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Location of the config file (`ROSTER_CONFIG` or `conf.json`)
    #[must_use]
    pub fn default_path() -> PathBuf {
        env::var(CONFIG_PATH_VAR).map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
    }

    /// Load configuration from a JSON file plus environment overrides
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, a required key is missing,
    /// or a value fails validation
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let builder = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json).required(true))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::build(builder)
    }

    /// Load configuration from an in-memory JSON document, without environment overrides
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(json, FileFormat::Json)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        config
            .validate()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        Ok(config)
    }

    /// Database id selected by the run mode
    ///
    /// # Errors
    /// Returns `ConfigError::MissingValue` if no id is configured for the mode
    pub fn database_id(&self, mode: Mode) -> Result<&str, ConfigError> {
        let id = match mode {
            Mode::Prod => self.notion_db_prod.as_str(),
            Mode::Test => self.notion_db_test.as_str(),
        };

        if id.trim().is_empty() {
            return Err(ConfigError::MissingValue(mode.database_key()));
        }
        Ok(id)
    }

    /// Tracing setup derived from the `log_*` keys
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if `log_level` is not a level name
    pub fn tracing_config(&self) -> Result<TracingConfig, ConfigError> {
        let level: Level = self.log_level.parse().map_err(|_| {
            ConfigError::InvalidValue(format!("unknown log_level '{}'", self.log_level))
        })?;

        let base = if self.log_json {
            TracingConfig::production()
        } else {
            TracingConfig::default()
        };

        Ok(TracingConfig { level, ..base }.with_log_dir(self.logs_dir.clone()))
    }

    #[must_use]
    pub fn coc_timeout(&self) -> Duration {
        Duration::from_secs(self.coc_timeout_secs)
    }

    #[must_use]
    pub fn notion_timeout(&self) -> Duration {
        Duration::from_secs(self.notion_timeout_secs)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Missing required configuration value: {0}")]
    MissingValue(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),

    #[error("Unknown mode '{0}' (expected 'prod' or 'test')")]
    UnknownMode(String),
}
