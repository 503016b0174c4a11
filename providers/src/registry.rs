use crate::circuit_breaker::CircuitBreaker;
use crate::foursquare::FoursquareProvider;
use crate::google::GoogleProvider;
use crate::mock::MockProvider;
use crate::osm::OsmProvider;
use crate::provider::Provider;
use crate::retry::Retry;
use crate::timeout::Timeout;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Unknown providers rank behind every configured one.
pub const DEFAULT_PRIORITY: i32 = 100;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProviderConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub retries: u32,
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

fn default_timeout_ms() -> u64 {
    5_000
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            enabled: false,
            priority: DEFAULT_PRIORITY,
            timeout_ms: default_timeout_ms(),
            retries: 0,
            api_key: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub osm: ProviderConfig,
    #[serde(default)]
    pub google: ProviderConfig,
    #[serde(default)]
    pub foursquare: ProviderConfig,
    #[serde(default)]
    pub mock: ProviderConfig,
}

/// A provider wrapped `CircuitBreaker(Retry(Timeout(base)))`, paired with its
/// startup-assigned priority.
pub struct RegisteredProvider {
    pub provider: Arc<dyn Provider>,
    pub priority: i32,
}

fn harden<P>(base: P, cfg: &ProviderConfig) -> Arc<dyn Provider>
where
    P: Provider + 'static,
{
    let timed_out = Timeout::new(base, Duration::from_millis(cfg.timeout_ms));
    let retried = Retry::new(timed_out, cfg.retries);
    Arc::new(CircuitBreaker::new(retried))
}

/// Builds the registered provider set and an immutable name -> priority map from
/// configuration. Both are fixed for the lifetime of the process: nothing mutates
/// either after this call returns, removing the startup-ordering hazard a
/// module-level mutable priority table would create.
pub fn build_providers(cfg: &ProvidersConfig) -> (Vec<RegisteredProvider>, Arc<HashMap<String, i32>>) {
    let mut registered = Vec::new();

    if cfg.osm.enabled {
        registered.push(RegisteredProvider {
            provider: harden(OsmProvider::new(), &cfg.osm),
            priority: cfg.osm.priority,
        });
    }
    if cfg.google.enabled {
        let api_key = cfg.google.api_key.clone().unwrap_or_default();
        registered.push(RegisteredProvider {
            provider: harden(GoogleProvider::new(api_key), &cfg.google),
            priority: cfg.google.priority,
        });
    }
    if cfg.foursquare.enabled {
        let api_key = cfg.foursquare.api_key.clone().unwrap_or_default();
        registered.push(RegisteredProvider {
            provider: harden(FoursquareProvider::new(api_key), &cfg.foursquare),
            priority: cfg.foursquare.priority,
        });
    }
    if cfg.mock.enabled {
        registered.push(RegisteredProvider {
            provider: harden(MockProvider, &cfg.mock),
            priority: cfg.mock.priority,
        });
    }

    let priorities: HashMap<String, i32> = registered
        .iter()
        .map(|r| (r.provider.name().to_string(), r.priority))
        .collect();

    (registered, Arc::new(priorities))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_providers_are_not_registered() {
        let cfg = ProvidersConfig {
            mock: ProviderConfig {
                enabled: true,
                priority: 5,
                ..Default::default()
            },
            ..Default::default()
        };

        let (registered, priorities) = build_providers(&cfg);
        assert_eq!(registered.len(), 1);
        assert_eq!(priorities.get("mock"), Some(&5));
    }
}
