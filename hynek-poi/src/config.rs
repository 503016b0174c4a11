use providers::ProvidersConfig;
use serde::Deserialize;
use shared::ConfigError;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RedisConfig {
    #[serde(default = "default_redis_addr")]
    pub addr: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub db: i64,
}

fn default_redis_addr() -> String {
    "127.0.0.1:6379".to_string()
}

impl Default for RedisConfig {
    fn default() -> Self {
        RedisConfig {
            addr: default_redis_addr(),
            password: String::new(),
            db: 0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CacheConfig {
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_cache_ttl_secs() -> u64 {
    5 * 60
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub redis: RedisConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Loads defaults, overlays an optional YAML file, then overlays
    /// `HYNEK_POI_`-prefixed environment variables for the handful of scalar
    /// fields most commonly tuned per-deployment.
    pub fn load(yaml_path: &Path) -> Result<Self, ConfigError> {
        let mut config: AppConfig = shared::load_yaml_file(yaml_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        const PREFIX: &str = "HYNEK_POI_";

        if let Some(v) = shared::env_override(PREFIX, "server.port") {
            if let Ok(v) = v.parse() {
                self.server.port = v;
            }
        }
        if let Some(v) = shared::env_override(PREFIX, "server.host") {
            self.server.host = v;
        }
        if let Some(v) = shared::env_override(PREFIX, "redis.addr") {
            self.redis.addr = v;
        }
        if let Some(v) = shared::env_override(PREFIX, "redis.password") {
            self.redis.password = v;
        }
        if let Some(v) = shared::env_override(PREFIX, "redis.db") {
            if let Ok(v) = v.parse() {
                self.redis.db = v;
            }
        }
        if let Some(v) = shared::env_override(PREFIX, "cache.ttl") {
            if let Ok(v) = v.parse() {
                self.cache.ttl_secs = v;
            }
        }

        apply_provider_env_overrides(PREFIX, "osm", &mut self.providers.osm);
        apply_provider_env_overrides(PREFIX, "google", &mut self.providers.google);
        apply_provider_env_overrides(PREFIX, "foursquare", &mut self.providers.foursquare);
        apply_provider_env_overrides(PREFIX, "mock", &mut self.providers.mock);
    }
}

fn apply_provider_env_overrides(prefix: &str, section: &str, cfg: &mut providers::ProviderConfig) {
    if let Some(v) = shared::env_override(prefix, &format!("{section}.enabled")) {
        if let Ok(v) = v.parse() {
            cfg.enabled = v;
        }
    }
    if let Some(v) = shared::env_override(prefix, &format!("{section}.priority")) {
        if let Ok(v) = v.parse() {
            cfg.priority = v;
        }
    }
    if let Some(v) = shared::env_override(prefix, &format!("{section}.timeout")) {
        if let Ok(v) = v.parse() {
            cfg.timeout_ms = v;
        }
    }
    if let Some(v) = shared::env_override(prefix, &format!("{section}.retries")) {
        if let Ok(v) = v.parse() {
            cfg.retries = v;
        }
    }
    if let Some(v) = shared::env_override(prefix, &format!("{section}.api_key")) {
        cfg.api_key = Some(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_yaml_file_falls_back_to_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/config.yaml")).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cache.ttl_secs, 300);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 9090\n").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn env_override_wins_over_yaml_and_defaults() {
        // SAFETY: test runs single-threaded from the test harness's perspective
        // for this variable; cleared at the end of the test.
        unsafe {
            std::env::set_var("HYNEK_POI_SERVER_PORT", "7070");
        }
        let config = AppConfig::load(Path::new("/nonexistent/config.yaml")).unwrap();
        unsafe {
            std::env::remove_var("HYNEK_POI_SERVER_PORT");
        }
        assert_eq!(config.server.port, 7070);
    }
}
