pub mod error;
pub mod key;
pub mod layered;
pub mod memory;
pub mod redis;

pub use error::CacheError;
pub use key::build_key;
pub use layered::LayeredCache;
pub use memory::MemoryCache;
pub use redis::RedisCache;
