//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! host config file (TOML)
//!     → loader.rs (parse & deserialize into HostConfig)
//!     → drivers.<broker> payload (untyped ConfigMap)
//!     → broker factory decodes it into BrokerConfig
//!     → validation.rs (semantic checks)
//!     → BrokerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::BrokerConfig;
pub use schema::ConfigMap;
pub use schema::HostConfig;
pub use schema::ObservabilityConfig;
