//! User service trait definition.

use crate::dto::{CreateUserRequest, UserResponse};
use async_trait::async_trait;
use userhub_core::UserHubResult;

/// User service trait.
///
/// Each operation is stateless per call; there is no coordination between
/// concurrent requests.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user.
    ///
    /// Delegates to the store only. The cache is NOT populated here: a
    /// freshly created record stays invisible to the cache until the first
    /// read-miss populates it, so create-then-read always round-trips to
    /// the store once.
    async fn create_user(&self, request: CreateUserRequest) -> UserHubResult<UserResponse>;

    /// Gets a user by ID through the manual cache-aside path.
    ///
    /// Cache first; on hit the cached copy is returned as-is with no
    /// freshness check against the store. On miss the store is queried,
    /// absence fails `NotFound`, and a found record is written to the cache
    /// before being returned.
    async fn get_user(&self, id: i64) -> UserHubResult<UserResponse>;

    /// Gets a user by ID through the decorator cache-aside path.
    ///
    /// Behaviorally equivalent to [`get_user`](Self::get_user): the lookup
    /// itself only computes the value or fails `NotFound`, and the
    /// surrounding [`CacheExt::get_or_set`](crate::CacheExt::get_or_set)
    /// decorator caches successful results keyed by id.
    async fn get_user_cached(&self, id: i64) -> UserHubResult<UserResponse>;
}
