//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use userhub_core::UserHubResult;

/// Cache interface for storing and retrieving cached data.
///
/// This trait provides an abstraction over caching implementations,
/// allowing for easy swapping between Redis, in-memory, or other cache
/// backends. Uses JSON strings for type-erased storage to maintain
/// dyn-compatibility.
///
/// There is no delete and no expiry: entries are only ever overwritten.
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    async fn get_raw(&self, key: &str) -> UserHubResult<Option<String>>;

    /// Set a raw JSON value in the cache. The entry never expires.
    async fn set_raw(&self, key: &str, value: &str) -> UserHubResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/set methods that work with any
/// serializable type.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> UserHubResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> UserHubResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json).await
    }

    /// Get a value or compute and cache it if not present.
    ///
    /// This is the explicit cache-aside decorator: look up the key, fall
    /// back to the factory on miss, populate the cache with the result,
    /// return it. Only successful results are cached; factory errors pass
    /// through uncached. A failed cache write after a successful compute
    /// does not fail the read.
    ///
    /// There is no single-flight protection: concurrent callers missing on
    /// the same key each invoke the factory and redundantly write the same
    /// value.
    async fn get_or_set<T, F, Fut>(&self, key: &str, factory: F) -> UserHubResult<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = UserHubResult<T>> + Send,
    {
        if let Some(cached) = self.get::<T>(key).await? {
            return Ok(cached);
        }

        let value = factory().await?;

        // The value is still valid even if the cache write fails.
        let _ = self.set(key, &value).await;

        Ok(value)
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
