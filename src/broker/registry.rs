//! Named broker factories.
//!
//! # Responsibilities
//! - Map broker names to factory functions
//! - Instantiate a broker by name from an untyped payload
//!
//! # Design Decisions
//! - Owned by the host and passed where needed; there is no global instance
//! - Populated once at start-up, then only read

use std::collections::HashMap;

use crate::broker::types::{BrokerError, BrokerResult};
use crate::broker::{cernbroker, Broker};
use crate::config::schema::ConfigMap;

/// Builds a broker from its configuration payload.
pub type BrokerFactory = fn(&ConfigMap) -> BrokerResult<Box<dyn Broker>>;

/// Name → factory registry.
#[derive(Default)]
pub struct BrokerRegistry {
    factories: HashMap<String, BrokerFactory>,
}

impl std::fmt::Debug for BrokerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl BrokerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every broker shipped with this crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .factories
            .insert(cernbroker::NAME.to_string(), cernbroker::factory);
        registry
    }

    /// Register `factory` under `name`.
    pub fn register(&mut self, name: impl Into<String>, factory: BrokerFactory) -> BrokerResult<()> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(BrokerError::DuplicateBroker(name));
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Instantiate the broker registered under `name`.
    pub fn new_broker(&self, name: &str, config: &ConfigMap) -> BrokerResult<Box<dyn Broker>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| BrokerError::UnknownBroker(name.to_string()))?;
        factory(config)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
