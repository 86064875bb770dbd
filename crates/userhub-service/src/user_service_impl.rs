//! User service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{CreateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use userhub_core::{User, UserHubError, UserHubResult};
use userhub_repository::UserRepository;

/// User service implementation: the cache-aside orchestrator.
///
/// Dependencies are injected by explicit constructor parameter, which keeps
/// the service testable without a live cache or database.
pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
    cache: Arc<dyn CacheInterface>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, request: CreateUserRequest) -> UserHubResult<UserResponse> {
        debug!("Creating user: {} {}", request.name, request.lastname);

        // Store only. The cache learns about this record on the first
        // read miss, not here.
        let saved = self.repository.save(&request.into()).await?;

        info!("User created: {}", saved.id);
        Ok(UserResponse::from(saved))
    }

    async fn get_user(&self, id: i64) -> UserHubResult<UserResponse> {
        debug!("Getting user: {}", id);

        let key = cache_keys::user_by_id(id);

        // Cache hit wins unconditionally; no freshness check against the store.
        if let Some(user) = self.cache.get::<User>(&key).await? {
            return Ok(UserResponse::from(user));
        }

        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserHubError::not_found("User", id))?;

        // No locking around miss-then-populate: concurrent requests for the
        // same cold id may each reach the store and redundantly write the
        // same value here.
        self.cache.set(&key, &user).await?;

        Ok(UserResponse::from(user))
    }

    async fn get_user_cached(&self, id: i64) -> UserHubResult<UserResponse> {
        debug!("Getting user (decorator path): {}", id);

        let key = cache_keys::user_by_id(id);
        let repository = Arc::clone(&self.repository);

        let user = self
            .cache
            .get_or_set::<User, _, _>(&key, move || async move {
                repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| UserHubError::not_found("User", id))
            })
            .await?;

        Ok(UserResponse::from(user))
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use userhub_core::NewUser;

    /// Mock user repository that assigns monotonically increasing ids and
    /// counts store lookups.
    struct MockUserRepository {
        users: Mutex<HashMap<i64, User>>,
        next_id: AtomicI64,
        find_calls: AtomicUsize,
    }

    impl MockUserRepository {
        fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
                find_calls: AtomicUsize::new(0),
            }
        }

        fn find_calls(&self) -> usize {
            self.find_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, user: &NewUser) -> UserHubResult<User> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let saved = user.clone().with_id(id);
            self.users.lock().unwrap().insert(id, saved.clone());
            Ok(saved)
        }

        async fn find_by_id(&self, id: i64) -> UserHubResult<Option<User>> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }
    }

    /// In-memory cache with the same raw JSON contract as the Redis cache.
    struct InMemoryCache {
        entries: Mutex<HashMap<String, String>>,
    }

    impl InMemoryCache {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
            }
        }

        fn contains(&self, key: &str) -> bool {
            self.entries.lock().unwrap().contains_key(key)
        }
    }

    #[async_trait]
    impl CacheInterface for InMemoryCache {
        async fn get_raw(&self, key: &str) -> UserHubResult<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_raw(&self, key: &str, value: &str) -> UserHubResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    /// Cache whose writes always fail. Reads always miss.
    struct WriteFailingCache;

    #[async_trait]
    impl CacheInterface for WriteFailingCache {
        async fn get_raw(&self, _key: &str) -> UserHubResult<Option<String>> {
            Ok(None)
        }

        async fn set_raw(&self, _key: &str, _value: &str) -> UserHubResult<()> {
            Err(UserHubError::cache("connection refused"))
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    fn create_service() -> (Arc<MockUserRepository>, Arc<InMemoryCache>, UserServiceImpl) {
        let repo = Arc::new(MockUserRepository::new());
        let cache = Arc::new(InMemoryCache::new());
        let service = UserServiceImpl::new(repo.clone(), cache.clone());
        (repo, cache, service)
    }

    fn ann_lee() -> CreateUserRequest {
        CreateUserRequest {
            name: "Ann".to_string(),
            lastname: "Lee".to_string(),
            age: 30,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_increasing_ids() {
        let (_repo, _cache, service) = create_service();

        let first = service.create_user(ann_lee()).await.unwrap();
        let second = service.create_user(ann_lee()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_create_does_not_populate_cache() {
        let (repo, cache, service) = create_service();

        let created = service.create_user(ann_lee()).await.unwrap();
        assert!(!cache.contains(&cache_keys::user_by_id(created.id)));

        // First read after create still round-trips to the store.
        service.get_user(created.id).await.unwrap();
        assert_eq!(repo.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_get_user_not_found_anywhere() {
        let (_repo, _cache, service) = create_service();

        let err = service.get_user(999).await.unwrap_err();
        match err {
            UserHubError::NotFound { resource_type, id } => {
                assert_eq!(resource_type, "User");
                assert_eq!(id, "999");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_user_cached_not_found_anywhere() {
        let (_repo, cache, service) = create_service();

        let err = service.get_user_cached(999).await.unwrap_err();
        assert!(matches!(err, UserHubError::NotFound { .. }));

        // Failures are never cached.
        assert!(!cache.contains(&cache_keys::user_by_id(999)));
    }

    #[tokio::test]
    async fn test_get_user_populates_cache_on_miss() {
        let (_repo, cache, service) = create_service();
        let created = service.create_user(ann_lee()).await.unwrap();

        let fetched = service.get_user(created.id).await.unwrap();
        assert_eq!(fetched, created);

        let key = cache_keys::user_by_id(created.id);
        let cached: User = serde_json::from_str(&cache.get_raw(&key).await.unwrap().unwrap()).unwrap();
        assert_eq!(UserResponse::from(cached), fetched);
    }

    #[tokio::test]
    async fn test_get_user_cache_hit_skips_store() {
        let (repo, _cache, service) = create_service();
        let created = service.create_user(ann_lee()).await.unwrap();

        service.get_user(created.id).await.unwrap();
        let calls_after_population = repo.find_calls();

        let second = service.get_user(created.id).await.unwrap();
        assert_eq!(second, created);
        assert_eq!(repo.find_calls(), calls_after_population, "cache hit must not reach the store");
    }

    #[tokio::test]
    async fn test_get_user_is_idempotent_after_population() {
        let (_repo, _cache, service) = create_service();
        let created = service.create_user(ann_lee()).await.unwrap();

        let first = service.get_user(created.id).await.unwrap();
        let second = service.get_user(created.id).await.unwrap();
        let third = service.get_user(created.id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[tokio::test]
    async fn test_create_then_read_scenario() {
        let (repo, cache, service) = create_service();

        let created = service.create_user(ann_lee()).await.unwrap();
        assert_eq!(created.id, 1);

        // First read: store hit, cache was empty.
        let first = service.get_user(1).await.unwrap();
        assert_eq!(first.name, "Ann");
        assert_eq!(first.lastname, "Lee");
        assert_eq!(first.age, 30);
        assert_eq!(repo.find_calls(), 1);
        assert!(cache.contains(&cache_keys::user_by_id(1)));

        // Second read: cache hit, same payload, zero additional store calls.
        let second = service.get_user(1).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(repo.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_get_user_cached_populates_and_skips_store() {
        let (repo, cache, service) = create_service();
        let created = service.create_user(ann_lee()).await.unwrap();

        let first = service.get_user_cached(created.id).await.unwrap();
        assert_eq!(first, created);
        assert_eq!(repo.find_calls(), 1);
        assert!(cache.contains(&cache_keys::user_by_id(created.id)));

        let second = service.get_user_cached(created.id).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(repo.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_decorator_path_survives_cache_write_failure() {
        let repo = Arc::new(MockUserRepository::new());
        let service = UserServiceImpl::new(repo.clone(), Arc::new(WriteFailingCache));

        let created = service.create_user(ann_lee()).await.unwrap();

        // The store's record is still valid even though caching it failed.
        let fetched = service.get_user_cached(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_manual_path_surfaces_cache_write_failure() {
        let repo = Arc::new(MockUserRepository::new());
        let service = UserServiceImpl::new(repo.clone(), Arc::new(WriteFailingCache));

        let created = service.create_user(ann_lee()).await.unwrap();

        // A dead cache is fatal to the request on the inline path.
        let err = service.get_user(created.id).await.unwrap_err();
        assert!(matches!(err, UserHubError::Cache(_)));
    }

    #[tokio::test]
    async fn test_both_read_paths_share_the_cache_entry() {
        let (repo, _cache, service) = create_service();
        let created = service.create_user(ann_lee()).await.unwrap();

        // Populate through the manual path, read through the decorator path.
        service.get_user(created.id).await.unwrap();
        let via_decorator = service.get_user_cached(created.id).await.unwrap();

        assert_eq!(via_decorator, created);
        assert_eq!(repo.find_calls(), 1);
    }
}
