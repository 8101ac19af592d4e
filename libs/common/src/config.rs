//! Layered configuration for wirekit tools
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`WIREKIT_` prefix, `__` between section and key)
//! 2. Explicit config file passed on the command line
//! 3. `wirekit.toml` / `wirekit.yaml` in the working directory
//! 4. Built-in defaults

use crate::logging::LogConfig;
use errors::{Result, WireError};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WIREKIT_";

/// Config files picked up from the working directory
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["wirekit.toml", "wirekit.yaml"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WireConfig {
    pub logging: LoggingSection,
    pub checksum: ChecksumSection,
    pub dump: DumpSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Level name or filter spec
    pub level: String,
    pub json: bool,
    pub color: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            color: true,
        }
    }
}

impl LoggingSection {
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            level: self.level.clone(),
            ansi: self.color,
            json: self.json,
        }
    }
}

/// Defaults for the `checksum` command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChecksumSection {
    /// Algorithm name (`bcc`, `sum`, `crc16`, `crc16-shift`)
    pub algorithm: String,
    /// Initial register value
    pub initial: u32,
}

impl Default for ChecksumSection {
    fn default() -> Self {
        Self {
            algorithm: "crc16".to_string(),
            initial: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DumpSection {
    /// Print a `<n> bytes` line before each dump
    pub show_header: bool,
}

/// Figment provider for a config file, chosen by extension
fn file_provider(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| WireError::config("Config file must have an extension"))?;

    match extension {
        "toml" => Ok(figment.merge(Toml::file(path))),
        "yaml" | "yml" => Ok(figment.merge(Yaml::file(path))),
        "json" => Ok(figment.merge(Json::file(path))),
        _ => Err(WireError::config(format!(
            "Unsupported config file format: {}",
            extension
        ))),
    }
}

impl WireConfig {
    /// Provider stack without extraction, for callers that add providers
    ///
    /// An explicit `path` must exist; the working-directory files are optional.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(WireConfig::default()))
            .merge(Toml::file(DEFAULT_CONFIG_FILES[0]))
            .merge(Yaml::file(DEFAULT_CONFIG_FILES[1]));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(WireError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            figment = file_provider(figment, path)?;
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load the effective configuration
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: WireConfig = Self::figment(path)?
            .extract()
            .map_err(|e| WireError::config(format!("Failed to load configuration: {}", e)))?;
        debug!(
            "Configuration: checksum={} initial={:#X} log={}",
            config.checksum.algorithm, config.checksum.initial, config.logging.level
        );
        Ok(config)
    }

    /// Render as YAML or JSON
    pub fn render(&self, format: &str) -> Result<String> {
        match format {
            "yaml" | "yml" => serde_yaml::to_string(self)
                .map_err(|e| WireError::config(format!("Failed to render configuration: {}", e))),
            "json" => serde_json::to_string_pretty(self)
                .map_err(|e| WireError::config(format!("Failed to render configuration: {}", e))),
            _ => Err(WireError::config(format!(
                "Unsupported config file format: {}",
                format
            ))),
        }
    }

    /// Save to a `.yaml`/`.yml`/`.json` file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| WireError::config("Config file must have an extension"))?;
        let content = self.render(extension)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
