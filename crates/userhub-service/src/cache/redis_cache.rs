//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use tracing::debug;
use userhub_core::{UserHubError, UserHubResult};

/// Redis-based cache service.
///
/// Entries are written with plain `SET` and never expire; the cache's own
/// lifecycle (process restart, FLUSHALL) is the only thing that removes them.
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    ///
    /// Every get misses and every set succeeds without storing anything,
    /// so callers degrade to hitting the store on every read.
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> UserHubResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                UserHubError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(UserHubError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> UserHubResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| UserHubError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str) -> UserHubResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| UserHubError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}'", key);
        Ok(())
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_cache() {
        let cache = RedisCacheService::disabled();
        assert!(!cache.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_cache_misses_and_ignores_writes() {
        let cache = RedisCacheService::disabled();
        cache.set_raw("k", "v").await.unwrap();
        assert_eq!(cache.get_raw("k").await.unwrap(), None);
    }
}
