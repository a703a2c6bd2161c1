//! Broker value types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A storage backend and the mount path it is responsible for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Network address of the storage backend.
    pub endpoint: String,
    /// Path prefix owned by the backend.
    pub mount_path: String,
}

impl ProviderInfo {
    pub fn new(endpoint: impl Into<String>, mount_path: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            mount_path: mount_path.into(),
        }
    }
}

/// Errors that can occur while building or querying a broker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrokerError {
    /// The configuration payload could not be decoded or failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The request context carries no authenticated user.
    #[error("user context required: {0}")]
    UserContextRequired(String),

    /// No configured mount path is a prefix of the requested path.
    #[error("storage provider not found for path: {path}")]
    ProviderNotFound { path: String },

    /// No factory is registered under this name.
    #[error("unknown broker: {0}")]
    UnknownBroker(String),

    /// A factory is already registered under this name.
    #[error("broker already registered: {0}")]
    DuplicateBroker(String),
}

impl BrokerError {
    /// True for errors a host should map to a not-found response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BrokerError::ProviderNotFound { .. })
    }

    /// True for errors a host should map to an authentication-required response.
    pub fn is_user_context_required(&self) -> bool {
        matches!(self, BrokerError::UserContextRequired(_))
    }
}

/// Result type for broker operations.
pub type BrokerResult<T> = Result<T, BrokerError>;
