//! Storage provider broker for a federated storage gateway.
//!
//! Given an authenticated user and a virtual path, a [`Broker`] decides which
//! storage backend owns the path by longest mount prefix.

pub mod broker;
pub mod config;
pub mod observability;
pub mod routing;
pub mod security;

pub use broker::{Broker, BrokerError, BrokerRegistry, CernBroker, ProviderInfo};
pub use config::{BrokerConfig, ConfigMap, HostConfig};
pub use security::{RequestContext, User};
