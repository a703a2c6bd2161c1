//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::json;
use storage_broker::{CernBroker, ConfigMap, RequestContext, User};

/// Turn a JSON object literal into a broker payload.
pub fn payload(value: serde_json::Value) -> ConfigMap {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// The configuration used throughout the resolution examples.
pub fn example_payload() -> ConfigMap {
    payload(json!({
        "rules": {
            "/eos/foo": "endpointA",
            "/eos/foo/bar": "endpointB"
        },
        "home_map": { "a": "endpointHome" }
    }))
}

pub fn example_broker() -> CernBroker {
    CernBroker::from_config_map(&example_payload()).unwrap()
}

/// A request context for `username`.
pub fn as_user(username: &str) -> RequestContext {
    RequestContext::with_user(User::new(username))
}
