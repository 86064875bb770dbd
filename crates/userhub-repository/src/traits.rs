//! Repository trait definitions.

use async_trait::async_trait;
use userhub_core::{NewUser, User, UserHubResult};

/// User repository trait.
///
/// Store reads are idempotent and side-effect-free, which is what makes
/// redundant lookups from concurrent cache misses acceptable upstream.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Saves a new user. The store assigns the identifier.
    async fn save(&self, user: &NewUser) -> UserHubResult<User>;

    /// Finds a user by ID. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i64) -> UserHubResult<Option<User>>;
}
