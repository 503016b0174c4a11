pub mod config;
pub mod logging;
pub mod metrics_defs;

pub use config::{ConfigError, env_override, load_yaml_file};
pub use logging::init_tracing;
