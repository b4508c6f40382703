//! Redis 缓存后端，多实例部署时共享登录账号缓存

use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis = &config.cache.redis;

        let client = redis::Client::open(redis.url.clone())
            .map_err(|e| format!("Invalid Redis URL '{}': {e}", redis.url))?;

        // 启动时用同步连接 PING 一次，失败则交给注册表回退
        client
            .get_connection()
            .and_then(|mut conn| redis::cmd("PING").query::<String>(&mut conn))
            .map_err(|e| {
                error!("Redis at {} is unreachable: {}", redis.url, e);
                format!("Redis ping failed: {e}")
            })?;

        debug!(
            "Redis cache ready (prefix '{}', default TTL {}s)",
            redis.key_prefix, config.cache.default_ttl
        );
        Ok(Self {
            client,
            key_prefix: redis.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        })
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                None
            }
        }
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let Some(mut conn) = self.connection().await else {
            return CacheResult::ExistsButNoValue;
        };

        match conn.get::<_, Option<String>>(self.prefixed(key)).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Failed to read cache key '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        let ttl = if ttl == 0 { self.default_ttl } else { ttl };
        if let Err(e) = conn
            .set_ex::<String, String, ()>(self.prefixed(&key), value, ttl)
            .await
        {
            error!("Failed to cache key '{}': {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        match conn.del::<String, i64>(self.prefixed(key)).await {
            Ok(0) => debug!("Cache key '{}' was already absent", key),
            Ok(_) => debug!("Evicted cache key '{}'", key),
            Err(e) => error!("Failed to evict cache key '{}': {}", key, e),
        }
    }

    // 只删除带本服务前缀的键
    async fn invalidate_all(&self) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        let pattern = format!("{}*", self.key_prefix);
        let keys: Vec<String> = match conn.keys(&pattern).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Failed to list keys matching '{}': {}", pattern, e);
                return;
            }
        };
        if keys.is_empty() {
            return;
        }

        match conn.del::<Vec<String>, i64>(keys).await {
            Ok(count) => debug!("Invalidated {} cached entries", count),
            Err(e) => error!("Failed to invalidate cache: {}", e),
        }
    }
}
