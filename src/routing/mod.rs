//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! find_provider(ctx, path)
//!     → broker enumerates candidate providers (stable order)
//!     → matcher.rs (longest mount prefix of path)
//!     → Return: matched ProviderInfo or NoMatch
//! ```
//!
//! # Design Decisions
//! - Candidates come from immutable config, no locks on the hot path
//! - No regex (prefix matching only)
//! - Deterministic: same input always matches same provider

pub mod matcher;

pub use matcher::{longest_prefix_match, PathPrefixMatcher};
