pub mod moka;
pub mod redis;

pub use moka::MokaCacheWrapper;
pub use redis::RedisObjectCache;
