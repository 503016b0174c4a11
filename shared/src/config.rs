use serde::de::DeserializeOwned;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config file: {0}")]
    Io(#[from] io::Error),
    #[error("parsing config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load `T` from a YAML file at `path`, falling back to `T::default()` when
/// the file does not exist. A file that exists but fails to parse is an error.
pub fn load_yaml_file<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(serde_yaml::from_str(&contents)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(T::default()),
        Err(err) => Err(ConfigError::Io(err)),
    }
}

/// Look up an environment variable override for a dotted config key, e.g.
/// `env_override("HYNEK_POI_", "server.port")` reads `HYNEK_POI_SERVER_PORT`.
pub fn env_override(prefix: &str, dotted_key: &str) -> Option<String> {
    let name = format!("{prefix}{}", dotted_key.to_uppercase().replace('.', "_"));
    std::env::var(name).ok()
}
