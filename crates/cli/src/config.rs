//! Configuration loading from portcheck.toml.

use catalog::{BuiltinSource, EntryCatalog, JsonFileSource};
use dispatch::{DEFAULT_ID_SEPARATOR, Resolver};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "portcheck.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub dispatch: DispatchConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Where catalog entries come from.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON file with `[{id, name, country}, ...]`.
    /// The built-in table is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct DispatchConfig {
    /// Character marking an exact entry id; its presence in `entry_id`
    /// forces a `get_entry` lookup.
    #[serde(default = "default_separator")]
    pub id_separator: char,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            id_separator: default_separator(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl LogConfig {
    /// Parse the configured filter, rejecting any invalid directive.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.filter).map_err(|source| ConfigError::InvalidLogFilter {
            filter: self.filter.clone(),
            source,
        })
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_separator() -> char {
    DEFAULT_ID_SEPARATOR
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file, else `portcheck.toml` if present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let separator = self.dispatch.id_separator;
        if separator.is_whitespace() || separator.is_control() {
            return Err(ConfigError::InvalidSeparator(separator));
        }
        self.log.env_filter()?;
        Ok(())
    }

    /// Build the entry catalog from the configured source.
    pub fn catalog(&self) -> catalog::Result<EntryCatalog> {
        match &self.catalog.path {
            Some(path) => EntryCatalog::load(&JsonFileSource::new(path)),
            None => EntryCatalog::load(&BuiltinSource),
        }
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.dispatch.id_separator)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid id separator {0:?}: must be a visible character")]
    InvalidSeparator(char),

    #[error("invalid log filter {filter:?}: {source}")]
    InvalidLogFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
}
