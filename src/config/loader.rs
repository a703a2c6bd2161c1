//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{ConfigMap, HostConfig};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The selected broker has no `[drivers.<name>]` table.
    #[error("no driver configuration for broker {0:?}")]
    MissingDriver(String),
}

/// Load host configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HostConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse host configuration from TOML text.
pub fn parse_config(content: &str) -> Result<HostConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

impl HostConfig {
    /// Payload for the selected broker driver.
    pub fn driver_config(&self) -> Result<&ConfigMap, ConfigError> {
        self.drivers
            .get(&self.broker)
            .ok_or_else(|| ConfigError::MissingDriver(self.broker.clone()))
    }
}
