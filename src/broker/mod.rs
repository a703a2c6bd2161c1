//! Storage broker subsystem.
//!
//! # Data Flow
//! ```text
//! Host start-up:
//!     registry.rs (name → factory)
//!     → factory decodes ConfigMap into BrokerConfig
//!     → Box<dyn Broker> (immutable, shared across requests)
//!
//! Per request:
//!     RequestContext (authenticated user)
//!     → list_providers: rules + per-user /home entry
//!     → find_provider: longest mount prefix of the path
//! ```
//!
//! # Design Decisions
//! - Brokers are read-only after construction (thread-safe without locks)
//! - Errors carry a category callers can match on, never logged here
//! - Registry is an explicit value owned by the host, not a global

pub mod cernbroker;
pub mod registry;
pub mod types;

use std::fmt::Debug;

use crate::routing::longest_prefix_match;
use crate::security::RequestContext;

pub use cernbroker::CernBroker;
pub use registry::{BrokerFactory, BrokerRegistry};
pub use types::{BrokerError, BrokerResult, ProviderInfo};

/// Resolves virtual paths to the storage provider responsible for them.
pub trait Broker: Send + Sync + Debug {
    /// All providers visible to the user in `ctx`.
    ///
    /// # Errors
    ///
    /// - `UserContextRequired` if `ctx` carries no user
    fn list_providers(&self, ctx: &RequestContext) -> BrokerResult<Vec<ProviderInfo>>;

    /// The provider whose mount path is the longest prefix of `path`.
    ///
    /// # Errors
    ///
    /// - `UserContextRequired` if `ctx` carries no user
    /// - `ProviderNotFound` if no mount path prefixes `path`
    fn find_provider(&self, ctx: &RequestContext, path: &str) -> BrokerResult<ProviderInfo> {
        let providers = self.list_providers(ctx)?;
        let found = longest_prefix_match(&providers, path).cloned();
        match found {
            Some(provider) => {
                tracing::debug!(
                    path = %path,
                    mount_path = %provider.mount_path,
                    endpoint = %provider.endpoint,
                    "Resolved storage provider"
                );
                Ok(provider)
            }
            None => Err(BrokerError::ProviderNotFound {
                path: path.to_string(),
            }),
        }
    }
}
