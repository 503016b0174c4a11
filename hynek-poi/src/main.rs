use cache::{LayeredCache, MemoryCache, RedisCache};
use clap::Parser;
use orchestrator::{CachedOrchestrator, ParallelOrchestrator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

mod config;
use config::AppConfig;

#[derive(Parser)]
struct Cli {
    /// Path to an optional YAML config file. Missing is fine; malformed is not.
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    shared::init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config).expect("failed to load configuration");

    let (registered, priorities) = providers::build_providers(&config.providers);
    info!(providers = registered.len(), "registered providers");

    let l1 = MemoryCache::new();
    let l2 = match RedisCache::connect(
        &config.redis.addr,
        Some(config.redis.password.as_str()).filter(|p| !p.is_empty()),
        config.redis.db,
    )
    .await
    {
        Ok(l2) => Some(l2),
        Err(err) => {
            // The shared cache tier is advisory; a process that can't reach it at
            // startup still serves requests, just without L2 read-through/promotion
            // until an operator fixes connectivity and restarts.
            warn!(%err, "failed to connect to redis, starting with L1-only cache");
            None
        }
    };
    let cache = LayeredCache::new(l1, l2);

    let parallel = ParallelOrchestrator::new(registered, priorities);
    let cached = CachedOrchestrator::new(parallel, cache, Duration::from_secs(config.cache.ttl_secs));

    api::serve(&config.server.host, config.server.port, Arc::new(cached)).await
}
