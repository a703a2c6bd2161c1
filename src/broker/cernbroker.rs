//! Rule-based broker for a CERN-style namespace.
//!
//! # Responsibilities
//! - Expose every configured rule as a provider
//! - Derive the user's `/home` provider from the first letter of the username
//!
//! # Design Decisions
//! - Rules enumerate in ascending mount path order, `/home` comes last
//! - A missing home letter yields a `/home` entry with an empty endpoint
//! - `project_map` is decoded and kept but not consulted

use crate::broker::types::{BrokerError, BrokerResult, ProviderInfo};
use crate::broker::Broker;
use crate::config::schema::{BrokerConfig, ConfigMap};
use crate::config::validation::validate_broker_config;
use crate::security::{RequestContext, User};

/// Registry name of this broker.
pub const NAME: &str = "cernbroker";

/// Mount path of the per-user home provider.
pub const HOME_MOUNT_PATH: &str = "/home";

/// Broker backed by a static rule set and a home-directory map.
#[derive(Debug, Clone)]
pub struct CernBroker {
    config: BrokerConfig,
}

impl CernBroker {
    /// Build a broker from an untyped configuration payload.
    pub fn from_config_map(payload: &ConfigMap) -> BrokerResult<Self> {
        let config: BrokerConfig =
            serde_json::from_value(serde_json::Value::Object(payload.clone()))
                .map_err(|e| BrokerError::InvalidConfiguration(e.to_string()))?;
        Self::new(config)
    }

    /// Build a broker from an already typed configuration.
    pub fn new(config: BrokerConfig) -> BrokerResult<Self> {
        validate_broker_config(&config).map_err(|errors| {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            BrokerError::InvalidConfiguration(joined)
        })?;

        tracing::info!(
            rules = config.rules.len(),
            home_letters = config.home_map.len(),
            projects = config.project_map.len(),
            "cernbroker constructed"
        );

        Ok(Self { config })
    }

    /// The configuration this broker was built with.
    pub fn config(&self) -> &BrokerConfig {
        &self.config
    }

    fn home_provider(&self, user: &User) -> ProviderInfo {
        let endpoint = match user.initial() {
            Some(letter) => {
                let key = letter.to_string();
                match self.config.home_map.get(&key) {
                    Some(endpoint) => endpoint.clone(),
                    None => {
                        tracing::debug!(%letter, "No home endpoint for letter");
                        String::new()
                    }
                }
            }
            None => String::new(),
        };
        ProviderInfo::new(endpoint, HOME_MOUNT_PATH)
    }
}

impl Broker for CernBroker {
    fn list_providers(&self, ctx: &RequestContext) -> BrokerResult<Vec<ProviderInfo>> {
        let user = ctx
            .get_user()
            .ok_or_else(|| BrokerError::UserContextRequired("no user context".to_string()))?;

        let mut providers: Vec<ProviderInfo> = self
            .config
            .rules
            .iter()
            .map(|(mount_path, endpoint)| ProviderInfo::new(endpoint.as_str(), mount_path.as_str()))
            .collect();

        providers.push(self.home_provider(user));
        Ok(providers)
    }
}

/// Registry factory for [`CernBroker`].
pub fn factory(payload: &ConfigMap) -> BrokerResult<Box<dyn Broker>> {
    Ok(Box::new(CernBroker::from_config_map(payload)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ConfigMap {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn broker() -> CernBroker {
        CernBroker::from_config_map(&payload(json!({
            "rules": {
                "/eos/foo": "endpointA",
                "/eos/foo/bar": "endpointB"
            },
            "home_map": { "a": "endpointHome" },
            "project_map": { "atlas": "endpointProject" }
        })))
        .unwrap()
    }

    fn alice() -> RequestContext {
        RequestContext::with_user(User::new("alice"))
    }

    #[test]
    fn test_list_providers_order() {
        let providers = broker().list_providers(&alice()).unwrap();
        assert_eq!(
            providers,
            vec![
                ProviderInfo::new("endpointA", "/eos/foo"),
                ProviderInfo::new("endpointB", "/eos/foo/bar"),
                ProviderInfo::new("endpointHome", "/home"),
            ]
        );
    }

    #[test]
    fn test_project_map_is_kept_but_not_listed() {
        let broker = broker();
        assert_eq!(broker.config().project_map.len(), 1);
        let providers = broker.list_providers(&alice()).unwrap();
        assert!(providers.iter().all(|p| p.endpoint != "endpointProject"));
    }

    #[test]
    fn test_home_lookup_is_case_sensitive() {
        let ctx = RequestContext::with_user(User::new("Alice"));
        let providers = broker().list_providers(&ctx).unwrap();
        assert_eq!(providers.last(), Some(&ProviderInfo::new("", "/home")));
    }

    #[test]
    fn test_empty_username_gets_empty_home_endpoint() {
        let ctx = RequestContext::with_user(User::new(""));
        let providers = broker().list_providers(&ctx).unwrap();
        assert_eq!(providers.last(), Some(&ProviderInfo::new("", "/home")));
    }

    #[test]
    fn test_non_ascii_initial() {
        let broker = CernBroker::from_config_map(&payload(json!({
            "home_map": { "é": "eoshome-e" }
        })))
        .unwrap();
        let ctx = RequestContext::with_user(User::new("émile"));
        let found = broker.find_provider(&ctx, "/home/émile").unwrap();
        assert_eq!(found.endpoint, "eoshome-e");
    }

    #[test]
    fn test_type_mismatch_is_invalid_configuration() {
        let err = CernBroker::from_config_map(&payload(json!({ "rules": ["/eos"] }))).unwrap_err();
        assert!(matches!(err, BrokerError::InvalidConfiguration(_)));

        let err =
            CernBroker::from_config_map(&payload(json!({ "home_map": { "a": 1 } }))).unwrap_err();
        assert!(matches!(err, BrokerError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_validation_failure_is_invalid_configuration() {
        let err = CernBroker::from_config_map(&payload(json!({
            "rules": { "": "nowhere" },
            "home_map": { "ab": "x" }
        })))
        .unwrap_err();
        match err {
            BrokerError::InvalidConfiguration(msg) => {
                assert!(msg.contains("empty mount path"));
                assert!(msg.contains("single character"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_factory_builds_broker() {
        let broker = factory(&payload(json!({ "rules": { "/eos": "eos" } }))).unwrap();
        let found = broker.find_provider(&alice(), "/eos/x").unwrap();
        assert_eq!(found, ProviderInfo::new("eos", "/eos"));
    }
}
