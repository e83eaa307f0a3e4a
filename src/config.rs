// ⚙️ Configuration - TOML file with defaults for every field

use crate::error::{GpaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind: String,

    /// Attach a permissive CORS layer
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: DEFAULT_BIND.to_string(),
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| GpaError::config(format!("invalid bind address '{}': {}", self.bind, e)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; rejects anything `tracing` would silently ignore.
    pub fn parsed_level(&self) -> Result<Level> {
        Level::from_str(&self.level)
            .map_err(|_| GpaError::config(format!("invalid logging level '{}'", self.level)))
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GpaError::config(format!("failed to parse config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        self.server.bind_addr()?;
        self.logging.parsed_level()?;
        Ok(())
    }
}

/// Where a loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file did not exist.
    Defaults,
}

/// Load config from `path`, reporting whether the file was actually read.
///
/// Logging is usually not set up yet when this runs, so callers log the
/// source themselves.
pub fn load_config_with_source<P: AsRef<Path>>(path: P) -> Result<(AppConfig, ConfigSource)> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok((AppConfig::default(), ConfigSource::Defaults));
    }

    let content = fs::read_to_string(path)?;
    let config = AppConfig::from_toml_str(&content)?;
    config.validate()?;

    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Load config from `path`. A missing file means defaults; a broken one is an error.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    load_config_with_source(path).map(|(config, _)| config)
}

// ============================================================================
// TESTS
// ============================================================================
