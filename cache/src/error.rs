/// Cache I/O errors are advisory: callers fold every variant into a miss (on
/// read) or a no-op (on write) rather than propagating them. The type exists so
/// each backend can log a meaningful cause before that happens.
#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
