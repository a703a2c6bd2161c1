//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Mount paths must be non-empty so every provider owns a real prefix
//! - Home map keys must be a single character
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BrokerConfig → Result<(), Vec<ValidationError>>
//! - Runs before a broker is handed to the caller

use thiserror::Error;

use crate::config::schema::BrokerConfig;

/// A single semantic problem found in a broker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A rule was declared with an empty mount path.
    #[error("rule for endpoint {endpoint:?} has an empty mount path")]
    EmptyMountPath { endpoint: String },

    /// A home map key is not exactly one character long.
    #[error("home_map key {key:?} must be a single character")]
    InvalidHomeKey { key: String },
}

/// Validate a decoded broker configuration.
pub fn validate_broker_config(config: &BrokerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (mount_path, endpoint) in &config.rules {
        if mount_path.is_empty() {
            errors.push(ValidationError::EmptyMountPath {
                endpoint: endpoint.clone(),
            });
        }
    }

    // Sorted so the report is deterministic.
    let mut home_keys: Vec<&String> = config.home_map.keys().collect();
    home_keys.sort();
    for key in home_keys {
        if key.chars().count() != 1 {
            errors.push(ValidationError::InvalidHomeKey { key: key.clone() });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
