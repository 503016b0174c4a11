use crate::error::CacheError;
use providers::POI;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use std::time::Duration;
use tracing::warn;

/// Shared L2 tier backed by Redis. Connection is established once at startup and
/// reused (and internally reconnected) via `ConnectionManager`. Every I/O error is
/// caught here and folded into a miss / no-op per the advisory-cache rule in
/// `LayeredCache`, so nothing above this module ever sees a `CacheError`.
#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(addr: &str, password: Option<&str>, db: i64) -> Result<Self, CacheError> {
        let mut url = format!("redis://{addr}/{db}");
        if let Some(password) = password.filter(|p| !p.is_empty()) {
            url = format!("redis://:{password}@{addr}/{db}");
        }
        let client = redis::Client::open(url)?;
        let manager = client.get_connection_manager().await?;
        Ok(RedisCache { manager })
    }

    pub async fn get(&self, key: &str) -> Option<Vec<POI>> {
        let mut conn = self.manager.clone();
        let raw: Option<String> = match conn.get(key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "redis get failed, treating as miss");
                return None;
            }
        };

        let raw = raw?;
        match serde_json::from_str(&raw) {
            Ok(pois) => Some(pois),
            Err(e) => {
                warn!(error = %e, "redis value failed to deserialize, treating as miss");
                None
            }
        }
    }

    pub async fn set(&self, key: &str, value: &[POI], ttl: Duration) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to serialize cache value, dropping write");
                return;
            }
        };

        let mut conn = self.manager.clone();
        let ttl_secs = ttl.as_secs().max(1);
        if let Err(e) = conn.set_ex::<_, _, ()>(key, raw, ttl_secs).await {
            warn!(error = %e, "redis set failed, write dropped");
        }
    }

    /// Used by the `/ready` handler: a bounded round-trip to confirm the backend
    /// is reachable, independent of any cache semantics.
    pub async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
