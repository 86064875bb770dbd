//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with a Redis implementation.
//! Entries have no TTL and no eviction; once written they persist for the
//! lifetime of the backing cache.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::RedisCacheService;
