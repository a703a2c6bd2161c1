//! Configuration schema definitions.
//!
//! Two layers live here:
//! - [`BrokerConfig`]: the typed routing configuration a broker is built from.
//! - [`HostConfig`]: the on-disk file a host process loads, which selects a
//!   broker by name and carries an untyped payload per broker driver.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Untyped configuration payload handed to broker factories.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// Routing configuration for the CERN-style broker.
///
/// Rules are kept in a `BTreeMap` so enumeration order is stable
/// (ascending mount path).
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BrokerConfig {
    /// Mount path prefix -> provider endpoint.
    pub rules: BTreeMap<String, String>,

    /// First letter of a username -> endpoint serving that user's `/home`.
    pub home_map: HashMap<String, String>,

    /// Project key -> endpoint. Accepted but not consulted during resolution.
    pub project_map: HashMap<String, String>,
}

/// Root configuration file for a host process.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    /// Registry name of the broker to instantiate.
    pub broker: String,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Per-driver configuration payloads, keyed by registry name.
    pub drivers: HashMap<String, ConfigMap>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            broker: "cernbroker".to_string(),
            observability: ObservabilityConfig::default(),
            drivers: HashMap::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
